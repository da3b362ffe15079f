//! Potential listings for the CLI.

use aw_scheme::Scheme;
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemeReport {
    pub name: String,
    pub potentials: Vec<PotentialReport>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PotentialReport {
    pub id: u32,
    pub poles: Vec<String>,
    pub wires: usize,
}

pub fn snapshot(scheme: &Scheme) -> CliResult<SchemeReport> {
    let mut potentials = Vec::new();
    for potential in scheme.potentials() {
        let poles = potential
            .poles()
            .iter()
            .map(|&p| scheme.pole_label(p))
            .collect::<Result<Vec<_>, _>>()?;
        potentials.push(PotentialReport {
            id: potential.id().index(),
            poles,
            wires: scheme.potential_wires(potential.id())?.len(),
        });
    }
    Ok(SchemeReport {
        name: scheme.name().to_string(),
        potentials,
    })
}

pub fn render_text(report: &SchemeReport) -> String {
    let mut out = format!("Scheme '{}': {} potentials\n", report.name, report.potentials.len());
    for p in &report.potentials {
        out.push_str(&format!(
            "  #{} [{} wires] {}\n",
            p.id,
            p.wires,
            p.poles.join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_potentials() {
        let mut scheme = Scheme::new("r");
        let k1 = scheme.add_element("K1").unwrap();
        let a = scheme.add_pole(k1, "1").unwrap();
        let b = scheme.add_pole(k1, "2").unwrap();
        scheme.wire(a, b).unwrap();

        let report = snapshot(&scheme).unwrap();
        assert_eq!(report.potentials.len(), 1);
        assert_eq!(report.potentials[0].poles, vec!["K1.1", "K1.2"]);
        assert_eq!(report.potentials[0].wires, 1);

        let text = render_text(&report);
        assert!(text.starts_with("Scheme 'r': 1 potentials"));
        assert!(text.contains("[1 wires] K1.1, K1.2"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["potentials"][0]["poles"][1], "K1.2");
    }
}
