use flywheel::config::{Config, SpheresConfig};
use flywheel::playback::{CancelToken, FrameSource, Player, ScriptedFrames, SystemFrames};
use flywheel::{create_crankshaft_demo, create_spheres_demo, Demo as _};

#[cfg(test)]
mod playback_tests {
    use super::*;

    #[test]
    fn test_player_plays_exactly_the_frame_budget() {
        let config = Config::default();
        let mut player = Player::new(create_spheres_demo(&config)).unwrap();

        let mut frames = ScriptedFrames::new(1.0 / 60.0, 42);
        assert_eq!(player.run(&mut frames), 42);
    }

    #[test]
    fn test_cancelled_token_yields_no_frames() {
        let token = CancelToken::new();
        token.cancel();

        let mut frames = SystemFrames::new(token);
        assert!(frames.next_frame().is_none());
    }

    #[test]
    fn test_cancellation_is_visible_across_clones() {
        let token = CancelToken::new();
        let observer = token.clone();

        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_system_frames_report_monotonic_time() {
        let mut frames = SystemFrames::new(CancelToken::new());

        let a = frames.next_frame().unwrap();
        let b = frames.next_frame().unwrap();
        assert!(b.time >= a.time);
        assert_eq!(b.number, a.number + 1);
    }

    #[test]
    fn test_empty_demo_configuration_fails_at_build() {
        let mut config = Config::default();
        config.spheres = SpheresConfig {
            count: 0,
            ..SpheresConfig::default()
        };

        assert!(Player::new(create_spheres_demo(&config)).is_err());
    }

    #[test]
    fn test_both_demos_build_through_player() {
        let config = Config::default();
        assert!(Player::new(create_spheres_demo(&config)).is_ok());

        let player = Player::new(create_crankshaft_demo(&config)).unwrap();
        assert_eq!(player.demo().name(), "crankshaft");
        assert_eq!(player.demo().time_scale(), 3.0);
    }
}
