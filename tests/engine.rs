mod common;

mod tests {
    use super::common::{FailingOutput, MockAnalog, MockButton, MockOutput, VecLog};
    use knob_light::effect::EffectSlot;
    use knob_light::{
        Calibration, Duration, EffectId, Engine, EngineConfig, EngineError, Instant, NoLog,
        TickResult, apply_gamma, hsv_to_rgb,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const LEDS: usize = 12;

    type TestEngine = Engine<MockAnalog, MockButton, MockOutput, SmallRng, VecLog, LEDS>;

    fn engine(effect: EffectId, analog: MockAnalog) -> TestEngine {
        let config = EngineConfig {
            effect,
            ..EngineConfig::default()
        };
        Engine::new(
            &config,
            analog,
            MockButton::default(),
            MockOutput::default(),
            SmallRng::seed_from_u64(7),
            VecLog::default(),
        )
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Hold the button down long enough to register, returns the switching tick
    fn press(engine: &mut TestEngine, t: u64) -> TickResult {
        engine.button_mut().high = false;
        let first = engine.tick(at(t)).unwrap();
        assert!(!first.switched);
        engine.tick(at(t + 50)).unwrap()
    }

    fn release(engine: &mut TestEngine, t: u64) {
        engine.button_mut().high = true;
        assert!(!engine.tick(at(t)).unwrap().switched);
        assert!(!engine.tick(at(t + 50)).unwrap().switched);
    }

    #[test]
    fn test_solid_hue_settles_on_knob_values() {
        let mut engine = engine(EffectId::SolidHue, MockAnalog::new(1000, 300, 15));

        let mut result = None;
        for i in 0..100 {
            result = Some(engine.tick(at(i * 1000)).unwrap());
        }
        let result = result.unwrap();
        assert_eq!(result.effect, EffectId::SolidHue);
        assert_eq!(result.delay, Duration::from_millis(1000));
        assert!(!result.switched);

        let hue = u16::try_from(Calibration::DEFAULT.remap(300, 0, 65535)).unwrap();
        let expected = apply_gamma(hsv_to_rgb(hue, 255, 255));
        let (pixels, brightness) = engine.output().last_frame();
        assert_eq!(*brightness, 255);
        assert_eq!(pixels.len(), LEDS);
        assert!(pixels.iter().all(|pixel| *pixel == expected));
    }

    #[test]
    fn test_every_tick_reads_all_knobs() {
        let mut engine = engine(EffectId::Off, MockAnalog::new(500, 500, 500));
        engine.tick(at(0)).unwrap();
        engine.tick(at(100)).unwrap();
        // Three flush reads plus one sample per knob
        assert_eq!(engine.analog_mut().reads.len(), 2 * 3 * 4);
    }

    #[test]
    fn test_button_press_switches_effect() {
        let mut engine = engine(EffectId::Off, MockAnalog::new(500, 500, 500));
        engine.tick(at(0)).unwrap();
        let frames = engine.output().frames.len();

        let result = press(&mut engine, 100);
        assert_eq!(
            result,
            TickResult {
                effect: EffectId::WhiteLight,
                delay: Duration::from_millis(300),
                switched: true,
            }
        );
        assert_eq!(engine.active_effect(), EffectId::WhiteLight);
        assert_eq!(engine.effect().id(), EffectId::WhiteLight);
        assert!(engine.log().contains("Button pressed! Switching to effect 1: White Light"));
        assert_eq!(engine.output().clears, 1);
        // The switching tick does not render
        assert_eq!(engine.output().frames.len(), frames + 1);

        // Holding the button does not switch again
        for t in (200..2000).step_by(100) {
            assert!(!engine.tick(at(t)).unwrap().switched);
        }
        assert_eq!(engine.active_effect(), EffectId::WhiteLight);

        // Releasing does not switch either
        release(&mut engine, 2000);
        assert_eq!(engine.active_effect(), EffectId::WhiteLight);
    }

    #[test]
    fn test_bouncing_button_is_ignored() {
        let mut engine = engine(EffectId::Fire, MockAnalog::new(500, 500, 500));
        for i in 0..40 {
            engine.button_mut().high = i % 2 == 1;
            let result = engine.tick(at(i * 10)).unwrap();
            assert!(!result.switched);
        }
        assert_eq!(engine.active_effect(), EffectId::Fire);
        assert!(!engine.log().contains("Button pressed!"));
        assert_eq!(engine.output().clears, 0);
    }

    #[test]
    fn test_presses_cycle_through_every_effect() {
        let mut engine = engine(EffectId::Off, MockAnalog::new(500, 500, 500));
        let mut t = 0;
        let mut seen = Vec::new();
        for _ in 0..8 {
            let result = press(&mut engine, t);
            assert!(result.switched);
            seen.push(result.effect);
            release(&mut engine, t + 100);
            t += 1000;
        }

        assert_eq!(
            seen,
            [
                EffectId::WhiteLight,
                EffectId::SolidHue,
                EffectId::PulseHue,
                EffectId::ChaseHue,
                EffectId::RainbowFade,
                EffectId::Fire,
                EffectId::WhiteFlicker,
                EffectId::Off,
            ]
        );
        assert!(engine.log().contains("Switching to effect 7: White Flicker"));
        assert!(engine.log().contains("Switching to effect 0: Off"));
        assert_eq!(engine.output().clears, 8);
    }

    #[test]
    fn test_switch_resets_effect_state() {
        let mut engine = engine(EffectId::ChaseHue, MockAnalog::new(500, 500, 500));
        for i in 0..3 {
            engine.tick(at(i * 10)).unwrap();
        }
        let EffectSlot::ChaseHue(chase) = engine.effect() else {
            panic!("expected chase");
        };
        assert_eq!(chase.position(), 3);

        let mut t = 100;
        for _ in 0..7 {
            press(&mut engine, t);
            release(&mut engine, t + 100);
            t += 1000;
        }
        let result = press(&mut engine, t);
        assert_eq!(result.effect, EffectId::ChaseHue);

        let EffectSlot::ChaseHue(chase) = engine.effect() else {
            panic!("expected chase");
        };
        assert_eq!(chase.position(), 0);
    }

    #[test]
    fn test_status_line() {
        let mut engine = engine(EffectId::Off, MockAnalog::new(1000, 300, 15));
        engine.tick(at(0)).unwrap();
        assert_eq!(
            engine.log().lines,
            ["[Off] brightness 1000 -> 144 | hue 300 -> 1530 | speed 15 -> 563"]
        );
    }

    #[test]
    fn test_status_is_throttled() {
        let mut engine = engine(EffectId::PulseHue, MockAnalog::new(1000, 300, 15));
        for t in [0, 300, 600, 999, 1000, 1500, 2100] {
            engine.tick(at(t)).unwrap();
        }
        let status = engine
            .log()
            .lines
            .iter()
            .filter(|line| line.starts_with("[Pulse Hue]"))
            .count();
        assert_eq!(status, 3);
        assert!(engine.log().contains("| level "));
    }

    #[test]
    fn test_start_blanks_strip_and_checks_knobs() {
        let mut engine = engine(EffectId::Off, MockAnalog::new(1000, 300, 15));
        engine.start().unwrap();

        assert_eq!(engine.output().clears, 1);
        assert!(engine.output().frames.is_empty());

        let lines = &engine.log().lines;
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Setup complete. Current effect: 0");
        assert_eq!(lines[1], "=== Potentiometer Test ===");
        assert!(lines[2..7].iter().all(|line| line == "Hue: 300 | Brightness: 1000 | Speed: 15"));
        assert_eq!(lines[7], "Expected: values should range from ~0 to ~1023");

        // Raw reads only, no flushing
        assert_eq!(engine.analog_mut().reads.len(), 15);
    }

    #[test]
    fn test_pulse_keeps_global_brightness_at_ceiling() {
        let mut engine = engine(EffectId::PulseHue, MockAnalog::new(1000, 0, 1000));
        for i in 0..200 {
            engine.tick(at(i * 10)).unwrap();
        }
        let frames = &engine.output().frames;
        let tail = &frames[frames.len() - 110..];
        assert!(tail.iter().all(|(_, brightness)| *brightness == 255));
        let levels: Vec<u8> = tail.iter().map(|(pixels, _)| pixels[0].r).collect();
        assert!(levels.contains(&0));
        assert!(levels.contains(&255));
    }

    fn fire_palette(engine: &TestEngine) -> &'static str {
        let EffectSlot::Fire(fire) = engine.effect() else {
            panic!("expected fire");
        };
        fire.palette().name
    }

    #[test]
    fn test_fire_palette_follows_hue_knob() {
        let mut engine = engine(EffectId::Fire, MockAnalog::new(500, 15, 500));
        let mut t = 0;
        for _ in 0..100 {
            engine.tick(at(t)).unwrap();
            t += 1000;
        }
        assert_eq!(fire_palette(&engine), "Classic Fire");
        assert!(engine.log().contains("| palette 0: Classic Fire"));

        engine.analog_mut().hue = 1000;
        for _ in 0..100 {
            engine.tick(at(t)).unwrap();
            t += 1000;
        }
        assert_eq!(fire_palette(&engine), "Inferno");
        let last = engine.log().lines.last().unwrap();
        assert!(last.starts_with("[Fire Effect]"));
        assert!(last.ends_with("| palette 5: Inferno"));
    }

    #[test]
    fn test_output_errors_propagate() {
        let config = EngineConfig::default();
        let mut engine: Engine<_, _, _, _, _, LEDS> = Engine::new(
            &config,
            MockAnalog::new(500, 500, 500),
            MockButton::default(),
            FailingOutput,
            SmallRng::seed_from_u64(1),
            NoLog,
        );

        assert!(matches!(engine.start(), Err(EngineError::Output("bus down"))));
        let error = engine.tick(at(0)).unwrap_err();
        assert_eq!(error.to_string(), "strip write failed: \"bus down\"");
        assert_eq!(error.into_inner(), "bus down");
    }
}
