//! # benchmark configuration
//!
//! The only knob is the multiplier that scales every variant's base
//! iteration count. It is taken from, in increasing priority, the built in
//! default, the `FIBGEN_MULTIPLIER` environment variable and the
//! `--multiplier` command line flag.
//!

use std::env;

use crate::rt::{Error, Result};
use crate::variant::VariantKind;

/// environment variable holding the multiplier
pub const MULTIPLIER_ENV: &str = "FIBGEN_MULTIPLIER";

/// multiplier used when nothing else is configured
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// number of values a benchmark run pulls
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IterationBudget(u64);

impl IterationBudget {
    /// scale `base` by `multiplier`, rounded to the nearest count
    pub fn new(base: u64, multiplier: f64) -> Result<Self> {
        let multiplier = check_multiplier(multiplier)?;
        Ok(IterationBudget(scale(base, multiplier)))
    }

    /// the count
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

// `multiplier` must already be checked, the product then never exceeds
// `base` and the cast cannot saturate
fn scale(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).round() as u64
}

fn check_multiplier(multiplier: f64) -> Result<f64> {
    if multiplier.is_finite() && (0.0..=1.0).contains(&multiplier) {
        Ok(multiplier)
    } else {
        Err(Error::InvalidMultiplier(multiplier))
    }
}

fn parse_multiplier(s: &str) -> Result<f64> {
    let m = s
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::InvalidArgument(format!("multiplier `{s}`: {e}")))?;
    check_multiplier(m)
}

/// benchmark run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    multiplier: f64,
    variants: Vec<VariantKind>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            multiplier: DEFAULT_MULTIPLIER,
            variants: VariantKind::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    /// create a config running every variant with the given multiplier
    pub fn new(multiplier: f64) -> Result<Self> {
        Ok(BenchConfig {
            multiplier: check_multiplier(multiplier)?,
            ..Default::default()
        })
    }

    /// override the multiplier from [`MULTIPLIER_ENV`] when it is set
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| env::var(key).ok())
    }

    fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(MULTIPLIER_ENV) {
            self.multiplier = parse_multiplier(&v)?;
            debug!("multiplier {} taken from {MULTIPLIER_ENV}", self.multiplier);
        }
        Ok(self)
    }

    /// apply command line flags, program name excluded
    ///
    /// `--multiplier <f>` / `-m <f>` sets the multiplier, each
    /// `--variant <name>` / `-v <name>` selects a variant to run; without any
    /// `--variant` all of them run
    pub fn apply_args<I, S>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_owned())),
                None => (arg, None),
            };
            let mut value = || {
                inline
                    .clone()
                    .or_else(|| args.next().map(|v| v.as_ref().to_owned()))
                    .ok_or_else(|| Error::InvalidArgument(format!("`{flag}` needs a value")))
            };
            match flag {
                "--multiplier" | "-m" => self.multiplier = parse_multiplier(&value()?)?,
                "--variant" | "-v" => {
                    let kind = value()?.parse::<VariantKind>()?;
                    if !selected.contains(&kind) {
                        selected.push(kind);
                    }
                }
                _ => return Err(Error::InvalidArgument(format!("unknown flag `{arg}`"))),
            }
        }
        if !selected.is_empty() {
            self.variants = selected;
        }
        Ok(self)
    }

    /// the multiplier
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// the variants to run
    pub fn variants(&self) -> &[VariantKind] {
        &self.variants
    }

    /// iteration count for one variant
    pub fn iterations(&self, kind: VariantKind) -> IterationBudget {
        // the multiplier was validated when it was set
        IterationBudget(scale(kind.base_iterations(), self.multiplier))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_budget_scaling() {
        assert_eq!(IterationBudget::new(1_000_000_000, 1.0).unwrap().get(), 1_000_000_000);
        assert_eq!(IterationBudget::new(100_000_000, 0.01).unwrap().get(), 1_000_000);
        assert_eq!(IterationBudget::new(10_000_000, 0.001).unwrap().get(), 10_000);
        assert_eq!(IterationBudget::new(10_000_000, 0.0).unwrap().get(), 0);
    }

    #[test]
    fn test_config_and_budget_agree() {
        for m in [0.0, 0.001, 0.01, 0.1, 0.3333, 0.5, 1.0] {
            let c = BenchConfig::new(m).unwrap();
            for kind in VariantKind::ALL {
                assert_eq!(
                    c.iterations(kind),
                    IterationBudget::new(kind.base_iterations(), m).unwrap(),
                    "{kind} m={m}"
                );
            }
        }
    }

    #[test]
    fn test_budget_rejects_bad_multiplier() {
        for m in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                IterationBudget::new(10, m),
                Err(Error::InvalidMultiplier(_))
            ));
        }
    }

    #[test]
    fn test_env_override() {
        let c = BenchConfig::default()
            .apply_vars(|k| (k == MULTIPLIER_ENV).then(|| "0.5".to_owned()))
            .unwrap();
        assert_eq!(c.multiplier(), 0.5);

        let c = BenchConfig::default().apply_vars(|_| None).unwrap();
        assert_eq!(c.multiplier(), DEFAULT_MULTIPLIER);

        let e = BenchConfig::default().apply_vars(|_| Some("fast".to_owned()));
        assert!(matches!(e, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_args() {
        let c = BenchConfig::default()
            .apply_args(["--multiplier", "0.1", "-v", "flow", "--variant=baseline"])
            .unwrap();
        assert_eq!(c.multiplier(), 0.1);
        assert_eq!(c.variants(), [VariantKind::Flow, VariantKind::Baseline]);
        assert_eq!(c.iterations(VariantKind::Flow).get(), 1_000_000);

        let c = BenchConfig::default().apply_args(["-m=0"]).unwrap();
        assert_eq!(c.variants(), VariantKind::ALL);
        assert_eq!(c.iterations(VariantKind::Baseline).get(), 0);
    }

    #[test]
    fn test_bad_args() {
        let bad: [&[&str]; 4] = [&["--multiplier"], &["-m", "2"], &["--fast"], &["-v", "threads"]];
        for args in bad {
            assert!(BenchConfig::default().apply_args(args.iter()).is_err(), "{args:?}");
        }
    }
}
