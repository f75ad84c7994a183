mod common;

mod tests {
    use embassy_time::Duration;
    use led_box_controller::live::remap;
    use led_box_controller::{BrightnessFloor, ControllerConfig, LinkEvent};

    use crate::common::{booted, controller_with, finish_wipe, ms};

    #[test]
    fn test_remap_full_scale() {
        assert_eq!(remap(255, 100, BrightnessFloor::KeepVisible), 100);
        assert_eq!(remap(255, 255, BrightnessFloor::KeepVisible), 255);
        assert_eq!(remap(128, 100, BrightnessFloor::KeepVisible), 50);
    }

    #[test]
    fn test_remap_small_input_stays_visible() {
        assert_eq!(remap(1, 100, BrightnessFloor::KeepVisible), 1);
        assert_eq!(remap(1, 100, BrightnessFloor::AllowOff), 1);
        assert_eq!(remap(2, 1, BrightnessFloor::AllowOff), 1);
    }

    #[test]
    fn test_remap_zero_follows_policy() {
        assert_eq!(remap(0, 100, BrightnessFloor::AllowOff), 0);
        assert_eq!(remap(0, 100, BrightnessFloor::KeepVisible), 1);
    }

    #[test]
    fn test_remap_never_exceeds_ceiling() {
        for max in 1..=255u8 {
            for input in [1u8, 17, 128, 254, 255] {
                let adjusted = remap(input, max, BrightnessFloor::KeepVisible);
                assert!((1..=max).contains(&adjusted));
            }
        }
    }

    #[test]
    fn test_live_brightness_applies_and_flushes() {
        let mut controller = booted();
        let shows = controller.driver().shows;

        controller.handle_event(LinkEvent::LiveBrightnessWritten(255), ms(1000));

        assert_eq!(controller.state().brightness(), 90);
        assert_eq!(controller.driver().brightness, 90);
        assert_eq!(controller.driver().shows, shows + 1);
    }

    #[test]
    fn test_live_brightness_stops_pulse_and_keeps_period() {
        let mut controller = booted();
        controller.apply_opcode(4, ms(1000));
        assert!(controller.pulse().is_enabled());

        controller.apply_live_brightness(51);

        assert!(!controller.pulse().is_enabled());
        assert_eq!(controller.state().pulse_period(), Duration::from_millis(50));
        assert_eq!(controller.state().brightness(), 18);

        controller.poll(ms(2000));
        assert_eq!(controller.state().brightness(), 18);
    }

    #[test]
    fn test_live_zero_with_allow_off_turns_strip_off() {
        let mut controller = controller_with(ControllerConfig {
            live_floor: BrightnessFloor::AllowOff,
            ..ControllerConfig::default()
        });
        controller.boot(ms(0));
        finish_wipe(&mut controller, 0);

        controller.apply_live_brightness(0);

        assert_eq!(controller.state().brightness(), 0);
        assert_eq!(controller.driver().brightness, 0);
    }

    #[test]
    fn test_live_zero_with_keep_visible_floors_at_one() {
        let mut controller = booted();

        controller.apply_live_brightness(0);

        assert_eq!(controller.state().brightness(), 1);
        assert_eq!(controller.driver().brightness, 1);
    }
}
