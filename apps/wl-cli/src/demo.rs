//! The built-in four-container demonstration.

use wl_core::ContainerId;

use crate::script::{Script, Step};

/// Fill one tank, pair it up, fill a second pair, merge all four, split them
/// again and top up one side. A status step follows each stage.
pub fn demo_script() -> Script {
    let id = ContainerId::new;
    let mut steps: Vec<Step> = (1..=4).map(|raw| Step::AddContainer { id: id(raw) }).collect();

    let stages: [&[Step]; 6] = [
        &[Step::AddWater {
            id: id(1),
            amount: 10.0,
        }],
        &[Step::Connect { a: id(1), b: id(2) }],
        &[
            Step::Connect { a: id(3), b: id(4) },
            Step::AddWater {
                id: id(3),
                amount: 20.0,
            },
        ],
        &[Step::Connect { a: id(2), b: id(3) }],
        &[Step::Disconnect { a: id(2), b: id(3) }],
        &[Step::AddWater {
            id: id(1),
            amount: 5.0,
        }],
    ];
    for stage in stages {
        steps.extend_from_slice(stage);
        steps.push(Step::Status);
    }

    Script {
        name: "four containers".into(),
        steps,
    }
}
