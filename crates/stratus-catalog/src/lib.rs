#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Static catalog of curve-fit models.
//!
//! Each [`ModelDescriptor`] names a model and gives its category, the
//! expression it evaluates, and an ordered list of [`ParameterSpec`]s with
//! defaults and bounds. Categories are small integer codes; [`category_name`]
//! and [`category_code`] translate between codes and names.
//!
//! ```rust
//! use stratus_catalog::{category_code, category_name, model};
//!
//! assert_eq!(category_name(0), Some("peak"));
//! assert_eq!(category_code("Peak"), Some(0));
//!
//! let gaussian = model("gaussian").unwrap();
//! assert_eq!(gaussian.parameter("sigma").unwrap().default, 1.0);
//! ```

use serde::Serialize;

/// Category code to name.
pub const CATEGORIES: &[(u8, &str)] = &[
    (0, "peak"),
    (1, "baseline"),
    (2, "step"),
    (3, "decay"),
    (4, "periodic"),
];

/// Name of a category code.
pub fn category_name(code: u8) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Code of a category name, ignoring ASCII case and surrounding whitespace.
pub fn category_code(name: &str) -> Option<u8> {
    let name = name.trim();
    CATEGORIES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

/// One fit parameter of a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name as used in the expression.
    pub name: &'static str,
    /// Starting value for a fit.
    pub default: f64,
    /// Lower bound; `None` is unbounded.
    pub min: Option<f64>,
    /// Upper bound; `None` is unbounded.
    pub max: Option<f64>,
    /// Unit, in terms of the x and y axes. Empty when dimensionless.
    pub unit: &'static str,
}

impl ParameterSpec {
    /// `true` when `value` lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// A model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Unique lowercase name.
    pub name: &'static str,
    /// Category code from [`CATEGORIES`].
    pub category: u8,
    /// One-line description.
    pub description: &'static str,
    /// The model function of `x`.
    pub expression: &'static str,
    /// Parameters in expression order.
    pub parameters: &'static [ParameterSpec],
}

impl ModelDescriptor {
    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Default values in parameter order.
    pub fn defaults(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.default).collect()
    }

    /// Parameter names in order.
    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.parameters.iter().map(|p| p.name).collect()
    }

    /// The category name.
    pub fn category_name(&self) -> Option<&'static str> {
        category_name(self.category)
    }
}

const fn param(
    name: &'static str,
    default: f64,
    min: Option<f64>,
    max: Option<f64>,
    unit: &'static str,
) -> ParameterSpec {
    ParameterSpec {
        name,
        default,
        min,
        max,
        unit,
    }
}

/// Every model in the catalog.
pub const MODELS: &[ModelDescriptor] = &[
    // peak
    ModelDescriptor {
        name: "gaussian",
        category: 0,
        description: "Gaussian peak",
        expression: "amplitude * exp(-(x - center)^2 / (2 * sigma^2))",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("center", 0.0, None, None, "x"),
            param("sigma", 1.0, Some(0.0), None, "x"),
        ],
    },
    ModelDescriptor {
        name: "lorentzian",
        category: 0,
        description: "Lorentzian (Cauchy) peak",
        expression: "amplitude * gamma^2 / ((x - center)^2 + gamma^2)",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("center", 0.0, None, None, "x"),
            param("gamma", 1.0, Some(0.0), None, "x"),
        ],
    },
    ModelDescriptor {
        name: "pseudo_voigt",
        category: 0,
        description: "Linear mix of Gaussian and Lorentzian peaks sharing a width",
        expression: "eta * lorentzian(x; amplitude, center, fwhm / 2) \
                     + (1 - eta) * gaussian(x; amplitude, center, fwhm / 2.3548)",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("center", 0.0, None, None, "x"),
            param("fwhm", 2.0, Some(0.0), None, "x"),
            param("eta", 0.5, Some(0.0), Some(1.0), ""),
        ],
    },
    // baseline
    ModelDescriptor {
        name: "constant",
        category: 1,
        description: "Flat baseline",
        expression: "c",
        parameters: &[param("c", 0.0, None, None, "y")],
    },
    ModelDescriptor {
        name: "linear",
        category: 1,
        description: "Straight-line baseline",
        expression: "slope * x + intercept",
        parameters: &[
            param("slope", 0.0, None, None, "y/x"),
            param("intercept", 0.0, None, None, "y"),
        ],
    },
    ModelDescriptor {
        name: "quadratic",
        category: 1,
        description: "Second-order polynomial baseline",
        expression: "a * x^2 + b * x + c",
        parameters: &[
            param("a", 0.0, None, None, "y/x^2"),
            param("b", 0.0, None, None, "y/x"),
            param("c", 0.0, None, None, "y"),
        ],
    },
    // step
    ModelDescriptor {
        name: "logistic_step",
        category: 2,
        description: "Smooth step following the logistic function",
        expression: "amplitude / (1 + exp(-(x - center) / width))",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("center", 0.0, None, None, "x"),
            param("width", 1.0, Some(0.0), None, "x"),
        ],
    },
    ModelDescriptor {
        name: "erf_step",
        category: 2,
        description: "Smooth step following the error function",
        expression: "amplitude * (1 + erf((x - center) / (sigma * sqrt(2)))) / 2",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("center", 0.0, None, None, "x"),
            param("sigma", 1.0, Some(0.0), None, "x"),
        ],
    },
    // decay
    ModelDescriptor {
        name: "exponential_decay",
        category: 3,
        description: "Single exponential decay toward an offset",
        expression: "amplitude * exp(-x / tau) + offset",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("tau", 1.0, Some(0.0), None, "x"),
            param("offset", 0.0, None, None, "y"),
        ],
    },
    ModelDescriptor {
        name: "double_exponential_decay",
        category: 3,
        description: "Sum of two exponential decays",
        expression: "a1 * exp(-x / tau1) + a2 * exp(-x / tau2) + offset",
        parameters: &[
            param("a1", 1.0, None, None, "y"),
            param("tau1", 1.0, Some(0.0), None, "x"),
            param("a2", 0.5, None, None, "y"),
            param("tau2", 10.0, Some(0.0), None, "x"),
            param("offset", 0.0, None, None, "y"),
        ],
    },
    ModelDescriptor {
        name: "power_law",
        category: 3,
        description: "Power-law decay",
        expression: "amplitude * x^(-exponent)",
        parameters: &[
            param("amplitude", 1.0, None, None, "y"),
            param("exponent", 1.0, Some(0.0), None, ""),
        ],
    },
    // periodic
    ModelDescriptor {
        name: "sine",
        category: 4,
        description: "Sine wave",
        expression: "amplitude * sin(2 * pi * frequency * x + phase) + offset",
        parameters: &[
            param("amplitude", 1.0, Some(0.0), None, "y"),
            param("frequency", 1.0, Some(0.0), None, "1/x"),
            param("phase", 0.0, Some(-std::f64::consts::PI), Some(std::f64::consts::PI), "rad"),
            param("offset", 0.0, None, None, "y"),
        ],
    },
    ModelDescriptor {
        name: "damped_sine",
        category: 4,
        description: "Sine wave with exponentially decaying amplitude",
        expression: "amplitude * exp(-x / tau) * sin(2 * pi * frequency * x + phase)",
        parameters: &[
            param("amplitude", 1.0, Some(0.0), None, "y"),
            param("frequency", 1.0, Some(0.0), None, "1/x"),
            param("phase", 0.0, Some(-std::f64::consts::PI), Some(std::f64::consts::PI), "rad"),
            param("tau", 1.0, Some(0.0), None, "x"),
        ],
    },
];

/// Look up a model by name.
pub fn model(name: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|m| m.name == name)
}

/// Models in a category, in catalog order.
pub fn models_in_category(code: u8) -> impl Iterator<Item = &'static ModelDescriptor> {
    MODELS.iter().filter(move |m| m.category == code)
}
