//! Shared plumbing for the liealg client binaries.
//!
//! An algebra is either one of the built-in [`Preset`]s or a JSON
//! [`Definition`] of its bracket table:
//!
//! ```json
//! {
//!   "generators": ["x", "y"],
//!   "brackets": [{ "left": "x", "right": "y", "value": { "x": "1" } }]
//! }
//! ```
//!
//! Coefficients are strings so that rationals such as `"-1/2"` survive
//! JSON intact. [`Report::of`] collects every structural invariant the
//! library computes into one serializable value.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use liealg::algebras::StructureConstantsAlgebra;
use liealg::uea::NcPolynomial;
use liealg::{Field, LieAlgebraWithBasis, Subalgebra};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A Lie algebra given by generator names and non-zero brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Basis names, in basis order.
    pub generators: Vec<String>,
    /// Brackets that are not zero. Either orientation of a pair may be given.
    #[serde(default)]
    pub brackets: Vec<BracketDefinition>,
}

/// `[left, right] = Σ value[name] · name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketDefinition {
    /// Left operand.
    pub left: String,
    /// Right operand.
    pub right: String,
    /// Coefficient of each generator in the bracket, as text.
    #[serde(default)]
    pub value: BTreeMap<String, String>,
}

impl Definition {
    /// Parses a JSON definition.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid definition.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed algebra definition")
    }

    /// Builds the algebra over `F`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient does not parse in `F`, or the
    /// bracket table is rejected by the builder.
    pub fn build<F: Field>(&self) -> Result<StructureConstantsAlgebra<F>> {
        let mut builder = StructureConstantsAlgebra::<F>::builder(&self.generators.join(","));
        for bracket in &self.brackets {
            let terms = bracket
                .value
                .iter()
                .map(|(name, c)| F::parse_scalar(c).map(|v| (name.clone(), v)))
                .collect::<liealg::Result<Vec<_>>>()
                .with_context(|| format!("in bracket [{}, {}]", bracket.left, bracket.right))?;
            builder = builder.bracket(&bracket.left, &bracket.right, terms);
        }
        let algebra = builder.build().context("invalid bracket table")?;
        debug!(
            generators = self.generators.len(),
            brackets = self.brackets.len(),
            field = %F::name(),
            "built algebra from definition"
        );
        Ok(algebra)
    }
}

/// Built-in algebras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// `sl(2)` on `e, h, f`.
    Sl2,
    /// `so(3)` on `x, y, z`.
    So3,
    /// The Heisenberg algebra of the given rank.
    Heisenberg(usize),
    /// `[x, y] = x`.
    TwoDimensional,
}

impl Preset {
    /// The algebra over `F`.
    pub fn build<F: Field>(self) -> StructureConstantsAlgebra<F> {
        match self {
            Self::Sl2 => StructureConstantsAlgebra::sl2(),
            Self::So3 => StructureConstantsAlgebra::so3(),
            Self::Heisenberg(n) => StructureConstantsAlgebra::heisenberg(n),
            Self::TwoDimensional => StructureConstantsAlgebra::two_dimensional_nonabelian(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.trim() {
            "sl2" => Ok(Self::Sl2),
            "so3" => Ok(Self::So3),
            "two-dim" => Ok(Self::TwoDimensional),
            "heisenberg" => Ok(Self::Heisenberg(1)),
            other => other
                .strip_prefix("heisenberg:")
                .and_then(|n| n.parse().ok())
                .map(Self::Heisenberg)
                .ok_or_else(|| {
                    format!("unknown preset '{other}' (expected sl2, so3, two-dim, heisenberg[:n])")
                }),
        }
    }
}

/// Structural invariants of one algebra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Display form of the algebra.
    pub algebra: String,
    /// Base field name.
    pub field: String,
    /// Dimension.
    pub dimension: usize,
    /// Non-zero structure coefficients as `[a, b] = …`.
    pub brackets: Vec<String>,
    /// True if every bracket vanishes.
    pub abelian: bool,
    /// True if the derived series reaches zero.
    pub solvable: bool,
    /// True if the lower central series reaches zero.
    pub nilpotent: bool,
    /// Killing form criterion; only meaningful in characteristic 0.
    pub semisimple: bool,
    /// Dimensions of the derived series.
    pub derived_series: Vec<usize>,
    /// Dimensions of the lower central series.
    pub lower_central_series: Vec<usize>,
    /// Dimensions of the upper central series.
    pub upper_central_series: Vec<usize>,
    /// Basis of the center.
    pub center: Vec<String>,
    /// Gram matrix of the Killing form, row by row.
    pub killing_form: Vec<Vec<String>>,
    /// Universal enveloping algebra relations as `x_j*x_i: …`.
    pub uea_relations: Vec<String>,
}

fn dimensions<L: LieAlgebraWithBasis>(series: &[Subalgebra<'_, L>]) -> Vec<usize> {
    series.iter().map(Subalgebra::dimension).collect()
}

impl Report {
    /// Computes every invariant of `algebra`.
    pub fn of<L: LieAlgebraWithBasis + fmt::Display>(algebra: &L) -> Self {
        let names = algebra.ordered_indices();
        let brackets = algebra
            .structure_coefficients()
            .iter()
            .map(|(&(i, j), v)| {
                format!("[{}, {}] = {}", names[i], names[j], algebra.display_element(v))
            })
            .collect();

        let killing = algebra.killing_form_matrix();
        let killing_form = (0..killing.nrows())
            .map(|i| killing.row_slice(i).iter().map(ToString::to_string).collect())
            .collect();

        let uea = algebra.construct_uea();
        let uea_relations = uea
            .relations()
            .map(|(word, rhs)| {
                let lhs = NcPolynomial::monomial(word, <L::Scalar as Field>::from_i64(1));
                format!("{}: {}", uea.display(&lhs), uea.display(&rhs))
            })
            .collect();

        let characteristic = <L::Scalar as Field>::characteristic();
        if characteristic > 0 {
            info!(characteristic, "semisimplicity uses the Killing criterion in positive characteristic");
        }

        Self {
            algebra: algebra.to_string(),
            field: <L::Scalar as Field>::name(),
            dimension: algebra.dimension(),
            brackets,
            abelian: algebra.is_abelian(),
            solvable: algebra.is_solvable(),
            nilpotent: algebra.is_nilpotent(),
            semisimple: algebra.is_semisimple(),
            derived_series: dimensions(&algebra.derived_series()),
            lower_central_series: dimensions(&algebra.lower_central_series()),
            upper_central_series: dimensions(&algebra.upper_central_series()),
            center: algebra.center().display_basis(),
            killing_form,
            uea_relations,
        }
    }
}

fn join(dims: &[usize]) -> String {
    dims.iter().map(ToString::to_string).collect::<Vec<_>>().join(" > ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.algebra)?;
        writeln!(f, "  dimension:            {}", self.dimension)?;
        for b in &self.brackets {
            writeln!(f, "  {b}")?;
        }
        writeln!(f, "  abelian:              {}", self.abelian)?;
        writeln!(f, "  solvable:             {}", self.solvable)?;
        writeln!(f, "  nilpotent:            {}", self.nilpotent)?;
        writeln!(f, "  semisimple:           {}", self.semisimple)?;
        writeln!(f, "  derived series:       {}", join(&self.derived_series))?;
        writeln!(f, "  lower central series: {}", join(&self.lower_central_series))?;
        writeln!(f, "  upper central series: {}", join(&self.upper_central_series))?;
        writeln!(f, "  center:               ({})", self.center.join(", "))?;
        writeln!(f, "  killing form:")?;
        for row in &self.killing_form {
            writeln!(f, "    [{}]", row.join(" "))?;
        }
        write!(f, "  enveloping algebra:")?;
        if self.uea_relations.is_empty() {
            write!(f, " commutative")?;
        }
        for r in &self.uea_relations {
            write!(f, "\n    {r}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liealg::field::{Gf3, Rational};

    const TWO_DIM: &str = r#"{
        "generators": ["x", "y"],
        "brackets": [{ "left": "y", "right": "x", "value": { "x": "-1" } }]
    }"#;

    #[test]
    fn definition_builds_the_same_algebra_as_the_preset() {
        let def = Definition::from_json(TWO_DIM).unwrap();
        let built = def.build::<Rational>().unwrap();
        assert_eq!(built, Preset::TwoDimensional.build::<Rational>());
    }

    #[test]
    fn bad_coefficient_is_reported_with_context() {
        let def = Definition::from_json(
            r#"{"generators": ["x", "y"], "brackets": [{"left": "x", "right": "y", "value": {"x": "one"}}]}"#,
        )
        .unwrap();
        let err = def.build::<Rational>().unwrap_err();
        assert_eq!(err.to_string(), "in bracket [x, y]");
    }

    #[test]
    fn fractional_coefficients_over_a_prime_field() {
        let def = Definition::from_json(
            r#"{"generators": ["x", "y"], "brackets": [{"left": "x", "right": "y", "value": {"x": "1/2"}}]}"#,
        )
        .unwrap();
        let built = def.build::<Gf3>().unwrap();
        assert_eq!(built.bracket_on_basis(0, 1).to_string(), "(2, 0)");
        assert!(built.is_solvable() && !built.is_nilpotent());

        let def = Definition::from_json(
            r#"{"generators": ["x", "y"], "brackets": [{"left": "x", "right": "y", "value": {"x": "1/3"}}]}"#,
        )
        .unwrap();
        assert!(def.build::<Gf3>().is_err());
    }

    #[test]
    fn unknown_generator_is_rejected() {
        let def = Definition::from_json(
            r#"{"generators": ["x"], "brackets": [{"left": "x", "right": "w"}]}"#,
        )
        .unwrap();
        assert!(def.build::<Rational>().is_err());
    }

    #[test]
    fn presets_parse() {
        assert_eq!("sl2".parse::<Preset>(), Ok(Preset::Sl2));
        assert_eq!("heisenberg:3".parse::<Preset>(), Ok(Preset::Heisenberg(3)));
        assert_eq!("heisenberg".parse::<Preset>(), Ok(Preset::Heisenberg(1)));
        assert!("gl3".parse::<Preset>().is_err());
    }

    #[test]
    fn report_of_two_dimensional_algebra() {
        let l = Preset::TwoDimensional.build::<Rational>();
        let report = Report::of(&l);
        assert_eq!(report.brackets, vec!["[x, y] = x"]);
        assert_eq!(report.derived_series, vec![2, 1, 0]);
        assert_eq!(report.lower_central_series, vec![2, 1]);
        assert_eq!(report.upper_central_series, vec![0]);
        assert!(report.solvable && !report.nilpotent && !report.semisimple);
        assert_eq!(report.killing_form, vec![vec!["0", "0"], vec!["0", "1"]]);
        assert_eq!(report.uea_relations, vec!["y*x: x*y - x"]);
        assert!(report.center.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let l = Preset::Heisenberg(1).build::<Gf3>();
        let json = serde_json::to_value(Report::of(&l)).unwrap();
        assert_eq!(json["dimension"], 3);
        assert_eq!(json["nilpotent"], true);
        assert_eq!(json["center"][0], "z");
        assert_eq!(json["field"], "Finite Field of size 3");
    }

    #[test]
    fn text_report_lists_series() {
        let l = Preset::Sl2.build::<Rational>();
        let text = Report::of(&l).to_string();
        assert!(text.starts_with("Lie algebra on 3 generators (e, h, f) over Rational Field\n"));
        assert!(text.contains("  derived series:       3\n"));
        assert!(text.contains("  semisimple:           true\n"));
        assert!(text.contains("    [4 0 0]\n"));
    }
}
