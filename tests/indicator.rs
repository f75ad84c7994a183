mod common;

mod tests {
    use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
    use led_box_controller::{IndicatorError, SwitchIndicator};

    use crate::common::MockPin;

    /// Pin whose writes always fail
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_indicator_drives_vcc_high_and_gnd_low() {
        let indicator = SwitchIndicator::new(MockPin::default(), MockPin::default()).unwrap();
        let (vcc, gnd) = indicator.release();
        assert_eq!(vcc.high, Some(true));
        assert_eq!(gnd.high, Some(false));
    }

    #[test]
    fn test_indicator_reports_failing_pin() {
        let result = SwitchIndicator::new(BrokenPin, MockPin::default());
        assert_eq!(result.err(), Some(IndicatorError::Vcc(ErrorKind::Other)));

        let result = SwitchIndicator::new(MockPin::default(), BrokenPin);
        assert_eq!(result.err(), Some(IndicatorError::Gnd(ErrorKind::Other)));
    }
}
