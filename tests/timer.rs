mod tests {
    use embassy_time::{Duration, Instant};
    use led_box_controller::IntervalTimer;

    #[test]
    fn test_new_timer_is_stopped() {
        let mut timer = IntervalTimer::new(Duration::from_millis(40));
        assert!(!timer.is_running());
        assert!(!timer.triggered(Instant::from_millis(1000)));
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_triggers_once_per_interval() {
        let mut timer = IntervalTimer::new(Duration::from_millis(40));
        timer.start(Instant::from_millis(0));

        assert!(!timer.triggered(Instant::from_millis(39)));
        assert!(timer.triggered(Instant::from_millis(40)));
        assert!(!timer.triggered(Instant::from_millis(41)));
        assert!(timer.triggered(Instant::from_millis(80)));
        assert_eq!(timer.deadline(), Some(Instant::from_millis(120)));
    }

    #[test]
    fn test_stall_yields_single_trigger() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        timer.start(Instant::from_millis(0));

        assert!(timer.triggered(Instant::from_millis(500)));
        assert!(!timer.triggered(Instant::from_millis(505)));
        assert!(timer.triggered(Instant::from_millis(510)));
    }

    #[test]
    fn test_set_period_does_not_start() {
        let mut timer = IntervalTimer::new(Duration::from_millis(40));
        timer.set_period(Duration::from_millis(10));
        assert!(!timer.is_running());
        assert_eq!(timer.period(), Duration::from_millis(10));
    }

    #[test]
    fn test_restart_counts_from_new_start() {
        let mut timer = IntervalTimer::new(Duration::from_millis(40));
        timer.start(Instant::from_millis(0));
        timer.start(Instant::from_millis(30));

        assert!(!timer.triggered(Instant::from_millis(40)));
        assert!(timer.triggered(Instant::from_millis(70)));
    }

    #[test]
    fn test_stop_clears_deadline() {
        let mut timer = IntervalTimer::new(Duration::from_millis(40));
        timer.start(Instant::from_millis(0));
        timer.stop();

        assert_eq!(timer.deadline(), None);
        assert!(!timer.triggered(Instant::from_millis(100)));
    }
}
