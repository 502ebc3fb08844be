//! Scene-level touch scenarios for buttons.

use std::sync::Arc;

use parking_lot::Mutex;
use tapnode_core::NodeId;
use tapnode_render::{Color, Point, Size, Texture};

use super::nodes::{ActionSender, Button, ButtonEvent, SpriteNode};
use super::{DispatchResult, Node, Scene, TouchEvent};
use crate::config::{ButtonConfig, CancelBehavior};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every action a button sends, in order.
struct Recorder {
    events: Mutex<Vec<ButtonEvent>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, sender: &ActionSender) {
        self.events.lock().push(sender.event);
    }

    fn take(&self) -> Vec<ButtonEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

const CENTER: Point = Point::new(100.0, 100.0);
const OUTSIDE: Point = Point::new(400.0, 400.0);

fn textures() -> (Texture, Texture, Texture) {
    (
        Texture::solid(80, 30, Color::BLUE),
        Texture::solid(80, 30, Color::GREEN),
        Texture::solid(80, 30, Color::BLACK),
    )
}

/// A button centered on `CENTER` with every event wired to `recorder`.
fn wired_button(recorder: &Arc<Recorder>, config: &ButtonConfig) -> Button {
    let (default, selected, disabled) = textures();
    let mut button =
        Button::with_config(default, selected, Some(disabled), config).with_position(CENTER);
    for event in ButtonEvent::ALL {
        button.set_action(recorder, event, Recorder::record);
    }
    button
}

fn scene_with_button(config: &ButtonConfig) -> (Scene, NodeId, Arc<Recorder>) {
    init_tracing();
    let recorder = Recorder::new();
    let mut scene = Scene::new();
    let id = scene.add(wired_button(&recorder, config));
    (scene, id, recorder)
}

fn button(scene: &Scene, id: NodeId) -> &Button {
    scene.get::<Button>(id).unwrap()
}

#[test]
fn test_tap_inside_fires_down_inside_up() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());

    assert_eq!(
        scene.handle_touch(&TouchEvent::began(1, CENTER)),
        DispatchResult::Accepted
    );
    assert!(button(&scene, id).is_selected());
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchDown]);

    scene.handle_touch(&TouchEvent::ended(1, CENTER));
    assert!(!button(&scene, id).is_selected());
    assert_eq!(
        recorder.take(),
        vec![ButtonEvent::TouchUpInside, ButtonEvent::TouchUp]
    );
}

#[test]
fn test_release_outside_fires_only_touch_up() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    recorder.take();

    // The sequence stays with the button even when it leaves the frame.
    assert_eq!(
        scene.handle_touch(&TouchEvent::ended(1, OUTSIDE)),
        DispatchResult::Accepted
    );
    assert!(!button(&scene, id).is_selected());
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchUp]);
}

#[test]
fn test_drag_out_and_back_tracks_selection() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());
    let default = button(&scene, id).default_texture().clone();
    let selected = button(&scene, id).selected_texture().clone();

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    assert_eq!(button(&scene, id).displayed_texture(), &selected);

    scene.handle_touch(&TouchEvent::moved(1, OUTSIDE));
    assert!(!button(&scene, id).is_selected());
    assert_eq!(button(&scene, id).displayed_texture(), &default);

    scene.handle_touch(&TouchEvent::moved(1, CENTER.offset(10.0, 5.0)));
    assert!(button(&scene, id).is_selected());

    scene.handle_touch(&TouchEvent::ended(1, CENTER));
    assert_eq!(
        recorder.take(),
        vec![
            ButtonEvent::TouchDown,
            ButtonEvent::TouchUpInside,
            ButtonEvent::TouchUp
        ]
    );
}

#[test]
fn test_frame_edges_are_half_open() {
    let (mut scene, _id, recorder) = scene_with_button(&ButtonConfig::default());
    // Frame spans x in [60, 140), y in [85, 115).
    scene.handle_touch(&TouchEvent::began(1, CENTER));
    scene.handle_touch(&TouchEvent::ended(1, Point::new(60.0, 85.0)));
    assert!(recorder.take().contains(&ButtonEvent::TouchUpInside));

    scene.handle_touch(&TouchEvent::began(2, CENTER));
    scene.handle_touch(&TouchEvent::ended(2, Point::new(140.0, 100.0)));
    assert!(!recorder.take().contains(&ButtonEvent::TouchUpInside));
}

#[test]
fn test_disabled_button_ignores_touches() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());
    scene.get_mut::<Button>(id).unwrap().set_enabled(false);

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    scene.handle_touch(&TouchEvent::moved(1, CENTER));
    scene.handle_touch(&TouchEvent::ended(1, CENTER));

    let button = button(&scene, id);
    assert!(!button.is_selected());
    assert_eq!(
        Some(button.displayed_texture()),
        button.disabled_texture()
    );
    assert!(recorder.take().is_empty());
}

#[test]
fn test_disabled_mid_gesture_deselects_silently() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    recorder.take();
    scene.get_mut::<Button>(id).unwrap().set_enabled(false);
    assert!(button(&scene, id).is_tracking());

    scene.handle_touch(&TouchEvent::ended(1, CENTER));
    let button = button(&scene, id);
    assert!(!button.is_selected());
    assert!(!button.is_tracking());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_enabled_end_without_began_still_resets_and_fires() {
    init_tracing();
    let recorder = Recorder::new();
    let mut button = wired_button(&recorder, &ButtonConfig::default());
    button.set_selected(true);

    button.touch_ended(&TouchEvent::ended(1, OUTSIDE));
    assert!(!button.is_selected());
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchUp]);
}

#[test]
fn test_cancel_ends_outside_by_default() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    recorder.take();
    scene.handle_touch(&TouchEvent::cancelled(1, CENTER));

    assert!(!button(&scene, id).is_selected());
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchUp]);
    assert_eq!(scene.active_touch_count(), 0);
}

#[test]
fn test_silent_cancel_fires_nothing() {
    let config = ButtonConfig {
        cancel_behavior: CancelBehavior::Silent,
        ..ButtonConfig::default()
    };
    let (mut scene, id, recorder) = scene_with_button(&config);

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    recorder.take();
    scene.handle_touch(&TouchEvent::cancelled(1, CENTER));

    assert!(!button(&scene, id).is_selected());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_rebinding_replaces_target() {
    let (mut scene, id, first) = scene_with_button(&ButtonConfig::default());
    let second = Recorder::new();
    scene
        .get_mut::<Button>(id)
        .unwrap()
        .set_action(&second, ButtonEvent::TouchDown, Recorder::record);

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    assert!(first.take().is_empty());
    assert_eq!(second.take(), vec![ButtonEvent::TouchDown]);
}

#[test]
fn test_dropped_target_is_skipped() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());
    drop(recorder);
    assert!(!button(&scene, id).has_action(ButtonEvent::TouchUp));

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    scene.handle_touch(&TouchEvent::ended(1, CENTER));
    assert!(!button(&scene, id).is_selected());
}

#[test]
fn test_action_sender_identifies_button() {
    init_tracing();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (default, selected, _) = textures();
    let mut button = Button::new(default, selected, None).with_position(CENTER);
    {
        let seen = seen.clone();
        button.set_action_fn(ButtonEvent::TouchDown, move |sender| {
            seen.lock().push(*sender)
        });
    }

    let mut scene = Scene::new();
    let id = scene.add(button);
    scene.handle_touch(&TouchEvent::began(3, CENTER));

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].node_id, id);
    assert_eq!(seen[0].event, ButtonEvent::TouchDown);
    assert_eq!(seen[0].location, CENTER);
}

#[test]
fn test_button_above_backdrop_receives_touch() {
    init_tracing();
    let recorder = Recorder::new();
    let mut scene = Scene::new();

    let mut backdrop = SpriteNode::with_color(Color::BLACK, Size::new(1000.0, 1000.0));
    backdrop.node_base_mut().set_user_interaction_enabled(true);
    backdrop.set_z_position(-1.0);
    scene.add(backdrop);

    let id = scene.add(wired_button(&recorder, &ButtonConfig::default()));
    assert_eq!(scene.hit_test(CENTER), Some(id));

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchDown]);
}

#[test]
fn test_two_buttons_two_fingers() {
    init_tracing();
    let left_rec = Recorder::new();
    let right_rec = Recorder::new();
    let mut scene = Scene::new();

    let left = scene.add(wired_button(&left_rec, &ButtonConfig::default()));
    let mut right = wired_button(&right_rec, &ButtonConfig::default());
    right.set_position(Point::new(300.0, 100.0));
    let right = scene.add(right);

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    scene.handle_touch(&TouchEvent::began(2, Point::new(300.0, 100.0)));
    assert_eq!(scene.active_touch_count(), 2);
    assert_eq!(scene.touch_owner(1), Some(left));
    assert_eq!(scene.touch_owner(2), Some(right));

    scene.handle_touch(&TouchEvent::ended(2, Point::new(300.0, 100.0)));
    assert!(button(&scene, left).is_selected());
    assert!(!button(&scene, right).is_selected());
    assert_eq!(
        right_rec.take(),
        vec![
            ButtonEvent::TouchDown,
            ButtonEvent::TouchUpInside,
            ButtonEvent::TouchUp
        ]
    );
    assert_eq!(left_rec.take(), vec![ButtonEvent::TouchDown]);
}

#[test]
fn test_two_fingers_on_one_button() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());

    scene.handle_touch(&TouchEvent::began(1, CENTER));
    assert_eq!(
        scene.handle_touch(&TouchEvent::began(2, CENTER)),
        DispatchResult::Ignored
    );
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchDown]);

    // The second finger lifting does not release the first.
    assert_eq!(
        scene.handle_touch(&TouchEvent::ended(2, CENTER)),
        DispatchResult::Ignored
    );
    assert!(button(&scene, id).is_selected());
    assert_eq!(button(&scene, id).tracked_touch(), Some(1));
    assert!(recorder.take().is_empty());

    scene.handle_touch(&TouchEvent::ended(1, OUTSIDE));
    assert!(!button(&scene, id).is_selected());
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchUp]);
}

#[test]
fn test_removed_button_reports_node_not_found() {
    let (mut scene, id, recorder) = scene_with_button(&ButtonConfig::default());
    scene.handle_touch(&TouchEvent::began(1, CENTER));
    scene.remove(id).unwrap();

    assert_eq!(
        scene.handle_touch(&TouchEvent::ended(1, CENTER)),
        DispatchResult::NodeNotFound
    );
    assert_eq!(recorder.take(), vec![ButtonEvent::TouchDown]);
    assert_eq!(scene.active_touch_count(), 0);
}

#[test]
fn test_dump_tree_shows_button_label() {
    let (mut scene, id, _recorder) = scene_with_button(&ButtonConfig::default());
    let button = scene.get_mut::<Button>(id).unwrap();
    button.node_base_mut().set_name("play");
    button.set_label("Play", "Helvetica", 20.0);

    let dump = scene.dump_tree();
    assert!(dump.starts_with("Scene (1 node)\n"));
    assert!(dump.contains("└── Button \"play\" z=0 frame=(60, 85, 80x30)"));
    assert!(dump.contains("    └── LabelNode \"\" z=1"));
}
