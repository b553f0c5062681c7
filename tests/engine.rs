mod tests {
    use embassy_time::Duration;
    use myrtio_light_pattern::{
        ManualClock, PatternConfig, PatternEngine, PatternError, StyleId,
    };

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(42)
    }

    fn lit(lights: &[bool]) -> Vec<usize> {
        lights
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn test_new_engine_is_dark_for_every_size() {
        let clock = ManualClock::new();
        for size in 1..=255u8 {
            let engine = PatternEngine::new(size, &clock, rng()).unwrap();
            assert_eq!(engine.size(), size);
            assert_eq!(engine.limit(), size);
            assert_eq!(engine.cycles(), 0);
            assert!(engine.is_running());
            for index in 0..usize::from(size) {
                assert_eq!(engine.value(index), Ok(false));
            }
        }
    }

    #[test]
    fn test_new_engine_defaults() {
        let clock = ManualClock::new();
        let engine = PatternEngine::new(8, &clock, rng()).unwrap();
        assert_eq!(engine.speed(), Duration::from_millis(500));
        assert_eq!(engine.style_id(), Some(StyleId::Chase));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let clock = ManualClock::new();
        let result = PatternEngine::new(0, &clock, rng());
        assert!(matches!(result, Err(PatternError::InvalidSize(0))));
    }

    #[test]
    fn test_value_out_of_range() {
        let clock = ManualClock::new();
        let engine = PatternEngine::new(4, &clock, rng()).unwrap();
        assert_eq!(
            engine.value(4),
            Err(PatternError::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn test_chase_scenario() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(5, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Chase);
        engine.set_speed(Duration::from_millis(100));

        assert!(!engine.update());
        assert_eq!(lit(engine.lights()), Vec::<usize>::new());

        clock.set_millis(100);
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![0]);

        clock.set_millis(200);
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![1]);

        for millis in [300, 400, 500] {
            clock.set_millis(millis);
            assert!(engine.update());
        }
        assert_eq!(lit(engine.lights()), vec![4]);
        assert_eq!(engine.cycles(), 0);

        clock.set_millis(600);
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![0]);
        assert_eq!(engine.cycles(), 1);
    }

    #[test]
    fn test_off_scenario() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(4, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Off);

        clock.set_millis(500);
        assert!(engine.update());
        assert_eq!(engine.lights(), &[false; 4]);
        assert!(!engine.is_running());

        for step in 1..20 {
            clock.set_millis(500 + step * 500);
            assert!(!engine.update());
        }
        assert_eq!(engine.lights(), &[false; 4]);
    }

    #[test]
    fn test_solid_halts_after_first_tick() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(6, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Solid);

        clock.set_millis(500);
        assert!(engine.update());
        assert_eq!(engine.lights(), &[true; 6]);

        clock.set_millis(10_000);
        assert!(!engine.update());
        assert_eq!(engine.lights(), &[true; 6]);

        engine.start();
        assert!(engine.update());
        assert_eq!(engine.lights(), &[true; 6]);
    }

    #[test]
    fn test_gate_ticks_once_per_interval() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(3, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Blink);
        engine.set_speed(Duration::from_millis(100));

        let mut ticks = 0;
        for millis in 1..=1000 {
            clock.set_millis(millis);
            if engine.update() {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 10);
    }

    #[test]
    fn test_slow_polling_only_delays_ticks() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(4, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(100));

        clock.set_millis(1_000);
        assert!(engine.update());
        assert!(!engine.update());
        assert_eq!(lit(engine.lights()), vec![0]);

        clock.set_millis(1_099);
        assert!(!engine.update());
        clock.set_millis(1_100);
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![1]);
    }

    #[test]
    fn test_set_style_resets_everything() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(5, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Blink);
        engine.set_speed(Duration::from_millis(0));
        engine.set_limit(3).unwrap();
        for _ in 0..5 {
            engine.update();
        }
        assert_eq!(engine.cycles(), 2);
        assert_eq!(lit(engine.lights()), vec![0, 1, 2]);

        engine.stop();
        engine.set_style_id(StyleId::Fill);
        assert_eq!(engine.cycles(), 0);
        assert_eq!(engine.limit(), 5);
        assert!(engine.is_running());
        assert_eq!(engine.lights(), &[false; 5]);
        assert_eq!(engine.speed(), Duration::from_millis(0));

        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![0]);
    }

    #[test]
    fn test_set_limit_rejects_out_of_range() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(5, &clock, rng()).unwrap();
        engine.set_limit(3).unwrap();

        assert_eq!(
            engine.set_limit(0),
            Err(PatternError::InvalidLimit { limit: 0, size: 5 })
        );
        assert_eq!(
            engine.set_limit(6),
            Err(PatternError::InvalidLimit { limit: 6, size: 5 })
        );
        assert_eq!(engine.limit(), 3);

        engine.set_limit(5).unwrap();
        assert_eq!(engine.limit(), 5);
    }

    #[test]
    fn test_set_limit_keeps_lights_and_restarts() {
        let clock = ManualClock::new();
        let config = PatternConfig {
            style: StyleId::Solid,
            speed: Duration::from_millis(0),
            limit: None,
        };
        let mut engine = PatternEngine::with_config(4, &config, &clock, rng()).unwrap();
        assert!(engine.update());
        assert!(!engine.is_running());

        engine.set_limit(2).unwrap();
        assert!(engine.is_running());
        assert_eq!(engine.lights(), &[true; 4]);
    }

    #[test]
    fn test_with_config_applies_limit() {
        let clock = ManualClock::new();
        let config = PatternConfig {
            style: StyleId::Fill,
            speed: Duration::from_millis(10),
            limit: Some(2),
        };
        let mut engine = PatternEngine::with_config(6, &config, &clock, rng()).unwrap();
        assert_eq!(engine.limit(), 2);
        assert_eq!(engine.speed(), Duration::from_millis(10));

        let invalid = PatternConfig {
            limit: Some(7),
            ..config
        };
        assert!(matches!(
            PatternEngine::with_config(6, &invalid, &clock, rng()),
            Err(PatternError::InvalidLimit { limit: 7, size: 6 })
        ));

        for millis in [10, 20, 30] {
            clock.set_millis(millis);
            engine.update();
        }
        assert_eq!(engine.lights(), &[false; 6]);
        assert_eq!(engine.cycles(), 1);
    }

    #[test]
    fn test_stop_and_start() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(4, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(0));
        assert!(engine.update());

        engine.stop();
        engine.stop();
        assert!(!engine.update());
        assert_eq!(lit(engine.lights()), vec![0]);

        engine.start();
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![1]);
    }

    #[test]
    fn test_clear_keeps_cycles() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(2, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(0));
        for _ in 0..3 {
            engine.update();
        }
        assert_eq!(engine.cycles(), 1);

        engine.clear();
        assert_eq!(engine.cycles(), 1);
        assert_eq!(engine.lights(), &[false; 2]);

        engine.update();
        assert_eq!(lit(engine.lights()), vec![0]);
        assert_eq!(engine.cycles(), 1);
    }

    #[test]
    fn test_reset_restores_full_range() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(6, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(0));
        engine.set_limit(2).unwrap();
        for _ in 0..5 {
            engine.update();
        }
        assert_eq!(engine.cycles(), 2);

        engine.stop();
        engine.reset();
        assert_eq!(engine.cycles(), 0);
        assert_eq!(engine.limit(), 6);
        assert!(engine.is_running());
        assert_eq!(engine.lights(), &[false; 6]);
    }

    #[test]
    fn test_unrecognized_style_ticks_without_changes() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(4, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(100));

        for style in [12, 13, 200, 255] {
            engine.set_style(style);
            assert_eq!(engine.style(), style);
            clock.advance(Duration::from_millis(100));
            assert!(engine.update());
            assert!(!engine.update());
            assert_eq!(engine.lights(), &[false; 4]);
            assert_eq!(engine.cycles(), 0);
        }
        assert_eq!(engine.style_id(), None);
    }

    #[test]
    fn test_cycles_wrap_to_zero() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(1, &clock, rng()).unwrap();
        engine.set_style_id(StyleId::Blink);
        engine.set_speed(Duration::from_millis(0));

        for _ in 0..510 {
            engine.update();
        }
        assert_eq!(engine.cycles(), 255);

        engine.update();
        engine.update();
        assert_eq!(engine.cycles(), 0);
    }

    #[test]
    fn test_next_tick_deadline() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(3, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(250));

        clock.set_millis(300);
        assert!(engine.update());
        assert_eq!(engine.next_tick_at().as_millis(), 550);

        clock.set_millis(400);
        assert_eq!(engine.time_until_next_tick(), Duration::from_millis(150));

        clock.set_millis(900);
        assert_eq!(engine.time_until_next_tick(), Duration::from_millis(0));
    }

    #[test]
    fn test_set_speed_keeps_last_tick() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(4, &clock, rng()).unwrap();
        engine.set_speed(Duration::from_millis(100));

        clock.set_millis(100);
        assert!(engine.update());

        clock.set_millis(120);
        engine.set_speed(Duration::from_millis(50));
        assert!(!engine.update());

        clock.set_millis(149);
        assert!(!engine.update());

        clock.set_millis(150);
        assert!(engine.update());
        assert_eq!(lit(engine.lights()), vec![1]);
    }

    #[test]
    fn test_rejections_are_logged_without_log_feature() {
        let clock = ManualClock::new();
        let mut engine = PatternEngine::new(2, &clock, rng()).unwrap();
        assert!(engine.set_limit(3).is_err());
        engine.set_style(200);
        assert_eq!(engine.style(), 200);
    }
}
