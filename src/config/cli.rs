use crate::config::toml_config::PricingConfig;
use crate::config::CliConfig;
use crate::domain::intake::FormAnswers;
use crate::domain::model::QuoteRequest;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Where the calculator input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteInput {
    AnswersFile(String),
    RequestFile(String),
    Stdin,
}

/// What the binary prices once the input has been read.
#[derive(Debug, Clone)]
pub enum LoadedInput {
    Answers(FormAnswers),
    Request(QuoteRequest),
}

impl CliConfig {
    pub fn input(&self) -> QuoteInput {
        match (&self.answers, &self.request) {
            (Some(path), _) => QuoteInput::AnswersFile(path.clone()),
            (None, Some(path)) => QuoteInput::RequestFile(path.clone()),
            (None, None) => QuoteInput::Stdin,
        }
    }

    /// Loads and validates the pricing file, or the built-in table when none is given.
    pub fn load_pricing(&self) -> Result<PricingConfig> {
        let config = match &self.pricing {
            Some(path) => {
                tracing::info!("📁 Loading pricing from: {}", path);
                PricingConfig::from_file(path)?
            }
            None => PricingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl QuoteInput {
    pub fn load(&self) -> Result<LoadedInput> {
        match self {
            QuoteInput::AnswersFile(path) => {
                let answers: FormAnswers = serde_json::from_slice(&read_file(path)?)?;
                Ok(LoadedInput::Answers(answers))
            }
            QuoteInput::RequestFile(path) => {
                let request: QuoteRequest = serde_json::from_slice(&read_file(path)?)?;
                Ok(LoadedInput::Request(request))
            }
            QuoteInput::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                let answers: FormAnswers = serde_json::from_str(&buffer)?;
                Ok(LoadedInput::Answers(answers))
            }
        }
    }
}

fn read_file(path: &str) -> Result<Vec<u8>> {
    let data = fs::read(Path::new(path))?;
    Ok(data)
}
