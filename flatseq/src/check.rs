use clap::{Parser, ValueEnum};
use flatseq_core::{display_leaves, json};

use crate::flatten::Strategy;

struct Scenario {
    name: &'static str,
    input: &'static str,
    two_level: bool,
    expected: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "two-level rows",
        input: r#"[["a","b","c"],["d","e","f","h",false],[1,2,null]]"#,
        two_level: true,
        expected: r#"["a", "b", "c", "d", "e", "f", "h", false, 1, 2, null]"#,
    },
    Scenario {
        name: "deep nesting",
        input: r#"[[["a"],["b","c"]],["d","e",[["f"],"h"],false],[1,2,null,[[[[["!"]]]]],[]]]"#,
        two_level: false,
        expected: r#"["a", "b", "c", "d", "e", "f", "h", false, 1, 2, null, "!"]"#,
    },
    Scenario {
        name: "empty outer sequence",
        input: "[]",
        two_level: true,
        expected: "[]",
    },
    Scenario {
        name: "only empty containers",
        input: "[[[]],[[[]]]]",
        two_level: false,
        expected: "[]",
    },
];

#[derive(Debug, Parser)]
pub(crate) struct Check {}

impl Check {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        for scenario in SCENARIOS {
            let strategies = scenario.check()?;
            println!("ok {} ({})", scenario.name, strategies.join(", "));
        }
        println!("all {} scenarios passed", SCENARIOS.len());
        Ok(())
    }
}

impl Scenario {
    /// Run the scenario through every applicable strategy, returning the
    /// names of the strategies that were checked.
    fn check(&self) -> anyhow::Result<Vec<String>> {
        let value = json::parse(self.input)?;
        let mut checked = Vec::new();
        for strategy in Strategy::value_variants() {
            // deep strategies accept two-level input too
            if strategy.is_two_level() && !self.two_level {
                continue;
            }
            let mut rows = None;
            let output = display_leaves(strategy.leaves(&value, &mut rows)?);
            let name = strategy
                .to_possible_value()
                .map(|value| value.get_name().to_string())
                .unwrap_or_else(|| format!("{:?}", strategy));
            if output != self.expected {
                anyhow::bail!(
                    "{} with {}: expected {}, got {}",
                    self.name,
                    name,
                    self.expected,
                    output
                );
            }
            tracing::debug!(scenario = self.name, strategy = %name, "scenario passed");
            checked.push(name);
        }
        Ok(checked)
    }
}
