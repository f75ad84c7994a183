mod tests {
    use led_box_controller::color::{BLACK, GREEN, RED};
    use led_box_controller::{Rgb, SmartLedsStrip, StripDriver};
    use smart_leds::SmartLedsWrite;

    /// Writer that keeps every frame it receives
    #[derive(Default)]
    struct RecordingWriter {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    fn strip() -> SmartLedsStrip<RecordingWriter, 4> {
        SmartLedsStrip::new(RecordingWriter::default())
    }

    #[test]
    fn test_new_strip_is_dark_at_full_brightness() {
        let strip = strip();
        assert_eq!(strip.pixel_count(), 4);
        assert_eq!(strip.frame(), &[BLACK; 4]);
        assert_eq!(strip.brightness(), 255);
        assert!(strip.writer().frames.is_empty());
    }

    #[test]
    fn test_nothing_is_written_before_show() {
        let mut strip = strip();
        strip.fill(RED);
        strip.set_pixel(1, GREEN);
        assert!(strip.writer().frames.is_empty());

        strip.show();
        assert_eq!(strip.writer().frames, vec![vec![RED, GREEN, RED, RED]]);
    }

    #[test]
    fn test_out_of_range_pixel_is_ignored() {
        let mut strip = strip();
        strip.set_pixel(4, RED);
        assert_eq!(strip.frame(), &[BLACK; 4]);
    }

    #[test]
    fn test_show_scales_by_brightness() {
        let mut strip = strip();
        strip.fill(Rgb::new(255, 128, 0));
        strip.set_brightness(90);
        strip.show();

        // (c * (b + 1)) / 256
        let expected = Rgb::new(90, 45, 0);
        assert_eq!(strip.writer().frames[0], vec![expected; 4]);
        // The buffer keeps full-scale colors
        assert_eq!(strip.frame()[0], Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut strip = SmartLedsStrip::<_, 4>::new(RecordingWriter {
            fail: true,
            ..Default::default()
        });
        strip.fill(GREEN);
        strip.show();
        strip.show();

        let mut writer = strip.release();
        assert!(writer.frames.is_empty());

        writer.fail = false;
        let mut strip = SmartLedsStrip::<_, 4>::new(writer);
        strip.fill(GREEN);
        strip.show();
        assert_eq!(strip.writer().frames.len(), 1);
    }
}
