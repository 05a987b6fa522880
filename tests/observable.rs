//! A host type exposing the hub surface through the Observable trait.

use std::{cell::RefCell, rc::Rc};

use murmur::{Error, EventHub, Observable};

struct Thermostat {
    hub: EventHub<f64>,
    target: f64,
}

impl Thermostat {
    fn new(target: f64) -> Self {
        Self {
            hub: EventHub::default(),
            target,
        }
    }

    fn report(&mut self, reading: f64) -> murmur::Result<()> {
        let event = if reading > self.target {
            "over-target"
        } else {
            "in-range"
        };
        match self.send_messages(event, &reading) {
            Ok(_) => Ok(()),
            // A reading with nobody listening on its side of the target is fine.
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => Err(err),
        }
    }
}

impl Observable for Thermostat {
    type Payload = f64;

    fn hub(&self) -> &EventHub<f64> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut EventHub<f64> {
        &mut self.hub
    }
}

#[test]
fn test_host_delegates_registration_and_sending() {
    let mut thermostat = Thermostat::new(21.0);
    let alarms = Rc::new(RefCell::new(Vec::new()));

    let log = alarms.clone();
    thermostat
        .register_listener("over-target", "alarm", move |reading: &f64| {
            log.borrow_mut().push(*reading);
            Ok(())
        })
        .unwrap();

    thermostat.report(19.5).unwrap();
    thermostat.report(23.5).unwrap();

    assert_eq!(alarms.borrow().as_slice(), &[23.5]);
    assert!(thermostat.hub().contains_event("over-target"));
}

#[test]
fn test_host_mute_and_destroy_round_trip() {
    let mut thermostat = Thermostat::new(21.0);
    let alarms = Rc::new(RefCell::new(Vec::new()));

    let log = alarms.clone();
    thermostat
        .register_listener("over-target", "alarm", move |reading: &f64| {
            log.borrow_mut().push(*reading);
            Ok(())
        })
        .unwrap();

    thermostat.mute_listener("over-target", "alarm").unwrap();
    thermostat.report(25.0).unwrap();
    assert!(alarms.borrow().is_empty());

    thermostat.unmute_listener("over-target", "alarm").unwrap();
    let delivery = thermostat
        .send_whisper("over-target", "alarm", &30.0)
        .unwrap();
    assert!(delivery.is_delivered());
    assert_eq!(alarms.borrow().as_slice(), &[30.0]);

    thermostat.destroy_event("over-target").unwrap();
    let err = thermostat.send_messages("over-target", &26.0).unwrap_err();
    assert!(matches!(err, Error::EventNotFound(_)));
}
