use evaluation::EvalConfig;
use std::str::FromStr;
use uci::{UciOption, UciOptionType, UciOutput};
use utils::EdgeRule;

fn uci(include: bool, name: &'static str, option_type: UciOptionType) -> Option<UciOption> {
    if include {
        Some(UciOption { name, option_type })
    } else {
        None
    }
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:expr, $uci_type:expr, $default:expr, $include:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: uci($include, $uci_name, $uci_type),
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                match uci_name {
                    $($uci_name if $include => self.$field.update_from_uci(value),)*
                    _ => Err(format!("Unknown parameter: {}", uci_name)),
                }
            }

            pub fn to_uci(&self, output: &std::sync::mpsc::Sender<UciOutput>) -> Result<(), std::sync::mpsc::SendError<UciOutput>> {
                $(
                    if self.$field.uci.is_some() {
                        output.send(UciOutput::Option(self.$field.to_uci()))?;
                    }
                )*
                Ok(())
            }
        }
    };
}

define_config!(
    // Candidate moves are scored across this many workers, each on its own board copy
    (threads: usize, "Threads", UciOptionType::Spin { min: 1, max: 64 }, 1, true),

    // Validate rank and file separately; false falls back to the linear index check
    (strict_edges: bool, "Strict Edges", UciOptionType::Check, true, true),

    // Evaluation weights
    (material_scale: i32, "Material Scale", UciOptionType::Spin { min: 1, max: 1000 }, 100, cfg!(feature = "tuning")), // Multiplier on the material diff
    (threat_weight: i32, "Threat Weight", UciOptionType::Spin { min: 0, max: 10 }, 2, cfg!(feature = "tuning")), // Multiplier on reachable occupied squares
    (slider_range: u8, "Slider Range", UciOptionType::Spin { min: 1, max: 8 }, 8, cfg!(feature = "tuning")), // Max ray length for bishops, rooks and queens
);

impl EngineConfig {
    pub fn get_eval_config(&self) -> EvalConfig {
        EvalConfig {
            material_scale: self.material_scale.value,
            threat_weight: self.threat_weight.value,
            slider_range: self.slider_range.value,

            edge_rule: if self.strict_edges.value {
                EdgeRule::Strict
            } else {
                EdgeRule::LinearIndex
            },

            ..EvalConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: Option<UciOption>,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        if let Some(uci_meta) = &self.uci {
            uci_meta.option_type.validate(value)?;
        }

        let new_value = value
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn to_uci(&self) -> String {
        match &self.uci {
            Some(uci_meta) => uci_meta.option_type.to_uci(uci_meta.name, &self.value),
            None => String::new(),
        }
    }
}
