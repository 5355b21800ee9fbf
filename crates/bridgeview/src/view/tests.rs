//! Tests for the bridged view: lifecycle relay, bridge messages, commands.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use bridgeview_common::{BridgeError, BridgePayload, MessageBus, BRIDGE_MESSAGE_EVENT};

use super::*;
use crate::native::ViewCommand;

/// Native view fake that records everything it is asked to do.
#[derive(Clone, Default)]
struct RecordingView {
    commands: Rc<RefCell<Vec<ViewCommand>>>,
    visibility: Rc<RefCell<Vec<bool>>>,
    broken: bool,
}

impl NativeView for RecordingView {
    fn dispatch(&self, command: ViewCommand) -> Result<(), BridgeError> {
        if self.broken {
            return Err(BridgeError::Native("webview destroyed".into()));
        }
        self.commands.borrow_mut().push(command);
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), BridgeError> {
        if self.broken {
            return Err(BridgeError::Native("webview destroyed".into()));
        }
        self.visibility.borrow_mut().push(visible);
        Ok(())
    }
}

type Log = Arc<Mutex<Vec<String>>>;

fn log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Callbacks that append a line per invocation to `log`.
fn recording_callbacks(log: &Log) -> BridgeCallbacks<String> {
    let (a, b, c, d, e, f) = (
        Arc::clone(log),
        Arc::clone(log),
        Arc::clone(log),
        Arc::clone(log),
        Arc::clone(log),
        Arc::clone(log),
    );
    BridgeCallbacks::new()
        .on_bridge_message(move |m| a.lock().unwrap().push(format!("message:{m}")))
        .on_load_start(move |nav| b.lock().unwrap().push(format!("load_start:{}", nav.url)))
        .on_load(move |nav| c.lock().unwrap().push(format!("load:{}", nav.url)))
        .on_load_end(move || d.lock().unwrap().push("load_end".into()))
        .on_error(move |info| e.lock().unwrap().push(format!("error:{}", info.code)))
        .on_navigation_state_change(move |nav| {
            f.lock().unwrap().push(format!("nav:{}", nav.url))
        })
        .render_loading(|| "loading".to_string())
        .render_error(|domain, code, desc| format!("{domain}/{code}/{desc}"))
}

fn nav(url: &str) -> NavigationState {
    NavigationState {
        url: url.into(),
        ..Default::default()
    }
}

fn mounted(start_in_loading: bool, log: &Log) -> (BridgeView<RecordingView, String>, RecordingView, MessageBus) {
    let bus = MessageBus::new();
    let native = RecordingView::default();
    let mut view = BridgeView::new(start_in_loading, recording_callbacks(log));
    view.mount(native.clone(), &bus);
    (view, native, bus)
}

// -- Lifecycle relay --

#[test]
fn load_start_invokes_start_and_navigation_callbacks() {
    let log = log();
    let (mut view, _, _) = mounted(false, &log);

    view.handle_native_event(NativeEvent::LoadStart(nav("https://a/")));

    assert_eq!(entries(&log), vec!["load_start:https://a/", "nav:https://a/"]);
    assert_eq!(view.display_state(), DisplayState::Idle);
    assert_eq!(view.navigation().unwrap().url, "https://a/");
}

#[test]
fn load_finish_invokes_load_end_and_navigation() {
    let log = log();
    let (mut view, _, _) = mounted(true, &log);

    view.handle_native_event(NativeEvent::LoadFinish(nav("https://a/")));

    assert_eq!(
        entries(&log),
        vec!["load:https://a/", "load_end", "nav:https://a/"]
    );
    assert_eq!(view.display_state(), DisplayState::Idle);
}

#[test]
fn load_error_stores_info_and_invokes_error_and_load_end() {
    let log = log();
    let (mut view, _, _) = mounted(false, &log);

    view.handle_native_event(NativeEvent::LoadError(ErrorInfo::new("NET", -6, "timeout")));

    assert_eq!(entries(&log), vec!["error:-6", "load_end"]);
    assert_eq!(view.display_state(), DisplayState::Error);
    assert_eq!(view.last_error(), Some(&ErrorInfo::new("NET", -6, "timeout")));
}

#[test]
fn missing_callbacks_are_skipped() {
    let bus = MessageBus::new();
    let mut view: BridgeView<RecordingView> = BridgeView::new(false, BridgeCallbacks::new());
    view.mount(RecordingView::default(), &bus);

    view.handle_native_event(NativeEvent::LoadStart(nav("https://a/")));
    view.handle_native_event(NativeEvent::LoadError(ErrorInfo::new("NET", 1, "x")));
    view.handle_native_event(NativeEvent::LoadFinish(nav("https://a/")));
    view.handle_native_event(NativeEvent::ContentChanged {
        message: Some("ping".into()),
    });
    bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("ping"));

    assert_eq!(view.display_state(), DisplayState::Idle);
}

#[test]
fn events_while_unmounted_are_dropped() {
    let log = log();
    let mut view: BridgeView<RecordingView, String> =
        BridgeView::new(true, recording_callbacks(&log));

    view.handle_native_event(NativeEvent::LoadFinish(nav("https://a/")));

    assert!(entries(&log).is_empty());
    assert_eq!(view.display_state(), DisplayState::Loading);
}

// -- Render --

#[test]
fn start_in_loading_hides_webview_and_renders_placeholder() {
    let log = log();
    let (view, native, _) = mounted(true, &log);

    let frame = view.render();
    assert_eq!(frame.web, WebLayout::Hidden);
    assert_eq!(frame.overlay.as_deref(), Some("loading"));
    assert_eq!(*native.visibility.borrow(), vec![false]);
}

#[test]
fn error_frame_carries_most_recent_error() {
    let log = log();
    let (mut view, _, _) = mounted(false, &log);

    view.handle_native_event(NativeEvent::LoadError(ErrorInfo::new("DNS", -2, "no host")));
    view.handle_native_event(NativeEvent::LoadError(ErrorInfo::new("NET", -6, "timeout")));

    let frame = view.render();
    assert_eq!(frame.web, WebLayout::Hidden);
    assert_eq!(frame.overlay.as_deref(), Some("NET/-6/timeout"));
}

#[test]
fn visibility_follows_state_changes() {
    let log = log();
    let (mut view, native, _) = mounted(false, &log);

    view.handle_native_event(NativeEvent::LoadStart(nav("https://a/")));
    view.handle_native_event(NativeEvent::LoadError(ErrorInfo::new("NET", -6, "timeout")));
    view.handle_native_event(NativeEvent::LoadStart(nav("https://a/")));
    view.handle_native_event(NativeEvent::LoadFinish(nav("https://a/")));

    // mount, error, finish
    assert_eq!(*native.visibility.borrow(), vec![true, false, true]);
    assert_eq!(view.render().web, WebLayout::Visible);
    assert!(view.render().overlay.is_none());
}

// -- Bridge messages --

#[test]
fn bus_messages_reach_host_in_order() {
    let log = log();
    let (_view, _, bus) = mounted(false, &log);

    for m in ["ping", "pong", "ping"] {
        bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new(m));
    }

    assert_eq!(
        entries(&log),
        vec!["message:ping", "message:pong", "message:ping"]
    );
}

#[test]
fn content_changed_with_message_reaches_host() {
    let log = log();
    let (mut view, _, _) = mounted(false, &log);

    view.handle_native_event(NativeEvent::ContentChanged {
        message: Some("ping".into()),
    });
    view.handle_native_event(NativeEvent::ContentChanged { message: None });

    assert_eq!(entries(&log), vec!["message:ping"]);
}

#[test]
fn one_subscription_per_mounted_view() {
    let log = log();
    let (mut view, _, bus) = mounted(false, &log);
    assert_eq!(bus.subscriber_count(BRIDGE_MESSAGE_EVENT), 1);

    view.mount(RecordingView::default(), &bus);
    assert_eq!(bus.subscriber_count(BRIDGE_MESSAGE_EVENT), 1);

    bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("ping"));
    assert_eq!(entries(&log), vec!["message:ping"]);
}

#[test]
fn no_messages_after_unmount() {
    let log = log();
    let (mut view, _, bus) = mounted(false, &log);

    bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("before"));
    assert!(view.unmount().is_some());
    let delivered = bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("after"));

    assert_eq!(delivered, 0);
    assert_eq!(entries(&log), vec!["message:before"]);
    assert!(!view.is_mounted());
}

#[test]
fn dropping_view_releases_subscription() {
    let log = log();
    let (view, _, bus) = mounted(false, &log);
    drop(view);

    bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("late"));
    assert!(entries(&log).is_empty());
    assert_eq!(bus.subscriber_count(BRIDGE_MESSAGE_EVENT), 0);
}

#[test]
fn separate_views_each_receive_messages() {
    let bus = MessageBus::new();
    let (log_a, log_b) = (log(), log());
    let mut a: BridgeView<RecordingView, String> = BridgeView::new(false, recording_callbacks(&log_a));
    let mut b: BridgeView<RecordingView, String> = BridgeView::new(false, recording_callbacks(&log_b));
    a.mount(RecordingView::default(), &bus);
    b.mount(RecordingView::default(), &bus);

    bus.publish(BRIDGE_MESSAGE_EVENT, &BridgePayload::new("hi"));

    assert_eq!(entries(&log_a), vec!["message:hi"]);
    assert_eq!(entries(&log_b), vec!["message:hi"]);
    assert_ne!(a.id(), b.id());
}

// -- Commands --

#[test]
fn send_to_bridge_issues_one_command_without_state_change() {
    let log = log();
    let (view, native, _) = mounted(true, &log);

    view.send_to_bridge("hello");

    assert_eq!(
        *native.commands.borrow(),
        vec![ViewCommand::SendToBridge("hello".into())]
    );
    assert_eq!(view.display_state(), DisplayState::Loading);
}

#[test]
fn navigation_commands_dispatch_in_call_order() {
    let log = log();
    let (view, native, _) = mounted(false, &log);

    view.go_back();
    view.go_forward();
    view.reload();

    assert_eq!(
        *native.commands.borrow(),
        vec![ViewCommand::GoBack, ViewCommand::GoForward, ViewCommand::Reload]
    );
}

#[test]
fn commands_on_unmounted_view_are_no_ops() {
    let log = log();
    let (mut view, native, _) = mounted(false, &log);
    view.unmount();

    view.go_back();
    view.send_to_bridge("lost");

    assert!(native.commands.borrow().is_empty());
    assert_eq!(
        view.try_dispatch(ViewCommand::Reload),
        Err(BridgeError::NotMounted)
    );
}

#[test]
fn native_failures_are_not_raised() {
    let bus = MessageBus::new();
    let mut view: BridgeView<RecordingView> = BridgeView::new(false, BridgeCallbacks::new());
    view.mount(
        RecordingView {
            broken: true,
            ..Default::default()
        },
        &bus,
    );

    view.reload();
    view.send_to_bridge("x");
    assert!(matches!(
        view.try_dispatch(ViewCommand::GoBack),
        Err(BridgeError::Native(_))
    ));
}

#[test]
fn from_options_uses_start_in_loading_state() {
    let opts = WebViewOptions {
        start_in_loading_state: true,
        ..Default::default()
    };
    let view: BridgeView<RecordingView> = BridgeView::from_options(&opts, BridgeCallbacks::new());
    assert_eq!(view.display_state(), DisplayState::Loading);
}
