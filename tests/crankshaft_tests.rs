use flywheel::config::{Config, CrankshaftConfig};
use flywheel::demos::{link_position, pin_phase, pin_position, Crankshaft};
use flywheel::playback::{Player, ScriptedFrames};
use flywheel::scene::SceneGraph;
use flywheel::{create_crankshaft_demo, Demo};
use std::f32::consts::FRAC_PI_2;

#[cfg(test)]
mod crankshaft_tests {
    use super::*;

    #[test]
    fn test_pins_and_links_stay_on_their_circles_during_playback() {
        let mut demo = Crankshaft::new(CrankshaftConfig::default());
        let mut scene = SceneGraph::new();
        demo.build(&mut scene).unwrap();

        for step in 0..120 {
            let t = step as f32 * 0.07;
            demo.update(&mut scene, t);

            for &id in demo.pin_ids() {
                let p = scene.position(id);
                assert!((p.x * p.x + p.y * p.y - 4.0).abs() < 1e-4);
            }
            for &id in demo.link_ids() {
                let p = scene.position(id);
                assert!((p.x * p.x + p.y * p.y - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_first_pin_reference_pose() {
        let mut demo = Crankshaft::new(CrankshaftConfig::default());
        let mut scene = SceneGraph::new();
        demo.build(&mut scene).unwrap();

        demo.update(&mut scene, 0.0);
        let p = scene.position(demo.pin_ids()[0]);

        assert!((pin_phase(0, 0.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((p.x - 2.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        assert!((p.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_positions_match_closed_form_through_player() {
        let config = Config::default();
        let mut player = Player::new(create_crankshaft_demo(&config)).unwrap();

        let mut frames = ScriptedFrames::new(0.1, 11);
        player.run(&mut frames);

        // last frame time 1.0s, crankshaft scales time by 3
        let t = 3.0;
        let nodes = player.scene().nodes();

        // layout: flywheel, torus, 5 base, 4 pins, 8 links
        for i in 0..4 {
            let expected = pin_position(i, 2.0, t);
            assert!((nodes[7 + i].position - expected).length() < 1e-4);
        }
        for i in 0..8 {
            let expected = link_position(i, 2.0, t);
            assert!((nodes[11 + i].position - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_base_segments_spin_in_sync_with_pins() {
        let mut demo = Crankshaft::new(CrankshaftConfig::default());
        let mut scene = SceneGraph::new();
        demo.build(&mut scene).unwrap();

        demo.update(&mut scene, 2.5);
        for (i, &id) in demo.base_ids().iter().enumerate() {
            let rotation = scene.rotation(id);
            assert!((rotation.y + pin_phase(i, 2.5)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_flywheel_and_rim_never_move() {
        let config = Config::default();
        let mut player = Player::new(create_crankshaft_demo(&config)).unwrap();

        let start: Vec<_> = player.scene().nodes()[..2]
            .iter()
            .map(|n| (n.position, n.rotation))
            .collect();

        let mut frames = ScriptedFrames::new(0.05, 200);
        player.run(&mut frames);

        let end: Vec<_> = player.scene().nodes()[..2]
            .iter()
            .map(|n| (n.position, n.rotation))
            .collect();
        assert_eq!(start, end);
    }

    #[test]
    fn test_configurable_cylinder_count() {
        let config = CrankshaftConfig {
            cylinders: 2,
            ..CrankshaftConfig::default()
        };
        let mut demo = Crankshaft::new(config);
        let mut scene = SceneGraph::new();
        demo.build(&mut scene).unwrap();

        assert_eq!(demo.pin_ids().len(), 2);
        assert_eq!(demo.base_ids().len(), 3);
        assert_eq!(demo.link_ids().len(), 4);
    }
}
