//! Full mute cycle over a broadcast event, per-listener and event-wide.

use std::{cell::RefCell, rc::Rc};

use murmur::EventHub;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tick {
    n: u32,
}

type Log = Rc<RefCell<Vec<Tick>>>;

fn register(hub: &mut EventHub<Tick>, name: &'static str) -> Log {
    let log = Log::default();
    let seen = log.clone();
    hub.register_listener("tick", name, move |tick: &Tick| {
        seen.borrow_mut().push(tick.clone());
        Ok(())
    })
    .unwrap();
    log
}

fn ticks(ns: &[u32]) -> Vec<Tick> {
    ns.iter().map(|&n| Tick { n }).collect()
}

#[test]
fn test_mute_cycle_across_listeners_and_event() {
    let mut hub = EventHub::default();
    let l1 = register(&mut hub, "l1");
    let l2 = register(&mut hub, "l2");

    hub.send_messages("tick", &Tick { n: 1 }).unwrap();
    assert_eq!(*l1.borrow(), ticks(&[1]));
    assert_eq!(*l2.borrow(), ticks(&[1]));

    hub.mute_listener("tick", "l1").unwrap();
    hub.send_messages("tick", &Tick { n: 2 }).unwrap();
    assert_eq!(*l1.borrow(), ticks(&[1]));
    assert_eq!(*l2.borrow(), ticks(&[1, 2]));

    hub.unmute_listener("tick", "l1").unwrap();
    hub.mute_event("tick").unwrap();
    hub.send_messages("tick", &Tick { n: 3 }).unwrap();
    assert_eq!(*l1.borrow(), ticks(&[1]));
    assert_eq!(*l2.borrow(), ticks(&[1, 2]));

    hub.unmute_event("tick").unwrap();
    hub.send_messages("tick", &Tick { n: 4 }).unwrap();
    assert_eq!(*l1.borrow(), ticks(&[1, 4]));
    assert_eq!(*l2.borrow(), ticks(&[1, 2, 4]));
}

#[test]
fn test_unmute_event_restores_individual_listener_state() {
    let mut hub = EventHub::default();
    let l1 = register(&mut hub, "l1");
    let l2 = register(&mut hub, "l2");

    hub.mute_listener("tick", "l1").unwrap();
    hub.mute_event("tick").unwrap();
    hub.unmute_event("tick").unwrap();

    hub.send_messages("tick", &Tick { n: 5 }).unwrap();
    assert!(l1.borrow().is_empty());
    assert_eq!(*l2.borrow(), ticks(&[5]));
}

#[test]
fn test_whisper_respects_mute_cycle() {
    let mut hub = EventHub::default();
    let l1 = register(&mut hub, "l1");

    assert!(hub
        .send_whisper("tick", "l1", &Tick { n: 1 })
        .unwrap()
        .is_delivered());

    hub.mute_event("tick").unwrap();
    assert!(hub
        .send_whisper("tick", "l1", &Tick { n: 2 })
        .unwrap()
        .is_suppressed());

    hub.unmute_event("tick").unwrap();
    assert!(hub
        .send_whisper("tick", "l1", &Tick { n: 3 })
        .unwrap()
        .is_delivered());

    assert_eq!(*l1.borrow(), ticks(&[1, 3]));
}

#[test]
fn test_receipt_reflects_suppression() {
    let mut hub = EventHub::default();
    register(&mut hub, "l1");
    register(&mut hub, "l2");

    hub.mute_listener("tick", "l1").unwrap();
    let receipt = hub.send_messages("tick", &Tick { n: 1 }).unwrap();
    assert_eq!(receipt.notified_count(), 1);
    assert_eq!(receipt.suppressed_count(), 1);
    assert_eq!(receipt.notified()[0].name(), "l2");

    hub.mute_event("tick").unwrap();
    let receipt = hub.send_messages("tick", &Tick { n: 2 }).unwrap();
    assert_eq!(receipt.notified_count(), 0);
    assert_eq!(receipt.suppressed_count(), 2);
}
