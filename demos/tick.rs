use murmur::{EventHub, Observable, Result};

// A payload carried by every message
#[derive(Debug, Clone)]
struct Reading {
    sensor: &'static str,
    value: f64,
}

// A host type gaining the hub surface through the Observable trait
struct Station {
    hub: EventHub<Reading>,
}

impl Observable for Station {
    type Payload = Reading;

    fn hub(&self) -> &EventHub<Reading> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut EventHub<Reading> {
        &mut self.hub
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut station = Station {
        hub: EventHub::default(),
    };

    // Two listeners on the same event
    station.register_listener("reading", "display", |r: &Reading| {
        println!("display: {} = {:.1}", r.sensor, r.value);
        Ok(())
    })?;
    station.register_listener("reading", "logger", |r: &Reading| {
        println!("logger: {:?}", r);
        Ok(())
    })?;

    let reading = Reading {
        sensor: "temperature",
        value: 22.5,
    };
    let receipt = station.send_messages("reading", &reading)?;
    println!("notified {} listener(s)", receipt.notified_count());

    // Mute the display and broadcast again; only the logger reacts
    station.mute_listener("reading", "display")?;
    station.send_messages(
        "reading",
        &Reading {
            sensor: "temperature",
            value: 23.1,
        },
    )?;

    // A whisper reaches exactly one listener
    station.send_whisper(
        "reading",
        "logger",
        &Reading {
            sensor: "humidity",
            value: 48.0,
        },
    )?;

    Ok(())
}
