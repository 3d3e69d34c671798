//! Pin capacitance lookup for command-line and WASM consumers.
//!
//! Turns the query engine's `None` results into [`LibertyError`]s that name
//! the missing cell, pin, or attribute.

use std::fmt;

use crate::error::{LibertyError, Result};
use crate::liberty::{Group, Library};
use crate::query::{find_attribute_numeric, resolve_path};

/// Required attribute for a pin report.
pub const CAPACITANCE: &str = "capacitance";
/// Optional attribute, reported when present.
pub const RISE_CAPACITANCE: &str = "rise_capacitance";
/// Optional attribute, reported when present.
pub const FALL_CAPACITANCE: &str = "fall_capacitance";

/// Capacitance values read from one pin.
#[derive(Debug, Clone, PartialEq)]
pub struct PinCapacitance {
    pub cell: String,
    pub pin: String,
    pub capacitance: f64,
    pub rise_capacitance: Option<f64>,
    pub fall_capacitance: Option<f64>,
    /// Additional requested attributes, in request order
    pub extra: Vec<(String, Option<f64>)>,
}

/// Locate `cell`/`pin` in `library`.
pub fn find_pin<'l>(library: &'l Library, cell: &str, pin: &str) -> Result<&'l Group> {
    let cell_group = resolve_path(library.root(), &[("cell", cell)]).ok_or_else(|| {
        LibertyError::CellNotFound {
            cell: cell.to_string(),
        }
    })?;
    resolve_path(cell_group, &[("pin", pin)]).ok_or_else(|| LibertyError::PinNotFound {
        cell: cell.to_string(),
        pin: pin.to_string(),
    })
}

/// Read the capacitance attributes of `cell`/`pin`, plus any `extra` numeric attributes.
///
/// `capacitance` is required; everything else is reported as present or absent.
pub fn pin_capacitance(
    library: &Library,
    cell: &str,
    pin: &str,
    extra: &[&str],
) -> Result<PinCapacitance> {
    let pin_group = find_pin(library, cell, pin)?;

    let capacitance = find_attribute_numeric(pin_group, CAPACITANCE).ok_or_else(|| {
        LibertyError::AttributeNotFound {
            cell: cell.to_string(),
            pin: pin.to_string(),
            attribute: CAPACITANCE.to_string(),
        }
    })?;

    Ok(PinCapacitance {
        cell: cell.to_string(),
        pin: pin.to_string(),
        capacitance,
        rise_capacitance: find_attribute_numeric(pin_group, RISE_CAPACITANCE),
        fall_capacitance: find_attribute_numeric(pin_group, FALL_CAPACITANCE),
        extra: extra
            .iter()
            .map(|name| (name.to_string(), find_attribute_numeric(pin_group, name)))
            .collect(),
    })
}

impl fmt::Display for PinCapacitance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cell: {}", self.cell)?;
        writeln!(f, "pin: {}", self.pin)?;
        writeln!(f, "{}: {}", CAPACITANCE, self.capacitance)?;
        if let Some(v) = self.rise_capacitance {
            writeln!(f, "{}: {}", RISE_CAPACITANCE, v)?;
        }
        if let Some(v) = self.fall_capacitance {
            writeln!(f, "{}: {}", FALL_CAPACITANCE, v)?;
        }
        for (name, value) in &self.extra {
            if let Some(v) = value {
                writeln!(f, "{}: {}", name, v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liberty::parse;
    use approx::assert_relative_eq;

    const LIB: &str = r#"
library (asap7) {
  cell (A2O1A1Ixp33_ASAP7_75t_L) {
    area : 0.2187 ;
    pin (A1) {
      direction : input ;
      capacitance : 0.000639 ;
      rise_capacitance : 0.000639 ;
      fall_capacitance : 0.000604 ;
      max_transition : 320 ;
    }
    pin (B) {
      direction : input ;
      capacitance : "unknown" ;
    }
    pin (Y) {
      direction : output ;
      capacitance : 44 ;
    }
  }
}
"#;

    #[test]
    fn test_pin_capacitance() {
        let lib = parse(LIB).unwrap();
        let report = pin_capacitance(&lib, "A2O1A1Ixp33_ASAP7_75t_L", "A1", &["max_transition", "slew"])
            .unwrap();
        assert_relative_eq!(report.capacitance, 0.000639);
        assert_relative_eq!(report.fall_capacitance.unwrap(), 0.000604);
        assert_eq!(
            report.extra,
            vec![
                ("max_transition".to_string(), Some(320.0)),
                ("slew".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_report_format() {
        let lib = parse(LIB).unwrap();
        let report = pin_capacitance(&lib, "A2O1A1Ixp33_ASAP7_75t_L", "Y", &[]).unwrap();
        assert_eq!(
            report.to_string(),
            "cell: A2O1A1Ixp33_ASAP7_75t_L\npin: Y\ncapacitance: 44\n"
        );
    }

    #[test]
    fn test_lookup_failures() {
        let lib = parse(LIB).unwrap();

        let err = pin_capacitance(&lib, "NAND2", "A", &[]).unwrap_err();
        assert!(matches!(err, LibertyError::CellNotFound { .. }));
        assert_eq!(err.exit_code(), 3);

        let err = pin_capacitance(&lib, "A2O1A1Ixp33_ASAP7_75t_L", "Z", &[]).unwrap_err();
        assert!(matches!(err, LibertyError::PinNotFound { .. }));
        assert_eq!(err.exit_code(), 4);

        // A text capacitance counts as missing.
        let err = pin_capacitance(&lib, "A2O1A1Ixp33_ASAP7_75t_L", "B", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Attribute 'capacitance' not found on A2O1A1Ixp33_ASAP7_75t_L/B"
        );
        assert_eq!(err.exit_code(), 5);
    }
}
