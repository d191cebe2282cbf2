use crate::core::sounds::SoundConfig;
use crate::error::Result;
use crate::frequency::FrequencyFilter;
use crate::persistence::OutputFormat;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line configuration for the portmanteau finder
#[derive(Debug, Clone, Parser)]
#[command(name = "portmanteau")]
#[command(about = "Finds ideal portmanteaus in a phonetic dictionary")]
pub struct Config {
    /// Minimum word frequency (inclusive)
    pub min_frequency: u64,

    /// Phonetic dictionary with WORD<TAB>pron1, pron2 lines
    pub dictionary: PathBuf,

    /// Word frequency CSV (header, then word,count rows by descending count)
    pub frequency_list: PathBuf,

    /// File to write the candidate pairs to
    pub output: PathBuf,

    /// JSON file overriding the vowel list and/or primary sound groups
    #[arg(long)]
    pub sound_config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read the whole frequency list instead of stopping at the first row below the minimum
    #[arg(long)]
    pub scan_all: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn sounds(&self) -> Result<SoundConfig> {
        match &self.sound_config {
            Some(path) => SoundConfig::load(path),
            None => Ok(SoundConfig::english()),
        }
    }

    pub fn frequency_filter(&self) -> FrequencyFilter {
        let filter = FrequencyFilter::new(self.min_frequency);
        if self.scan_all {
            filter.scan_all()
        } else {
            filter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let config =
            Config::try_parse_from(["portmanteau", "1000", "dict.txt", "freq.csv", "out.txt"]).unwrap();
        assert_eq!(config.min_frequency, 1000);
        assert_eq!(config.dictionary, PathBuf::from("dict.txt"));
        assert_eq!(config.frequency_list, PathBuf::from("freq.csv"));
        assert_eq!(config.output, PathBuf::from("out.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.frequency_filter(), FrequencyFilter::new(1000));
        assert_eq!(config.sounds().unwrap(), SoundConfig::english());
    }

    #[test]
    fn test_options() {
        let config = Config::try_parse_from([
            "portmanteau", "5", "d", "f", "o", "--format", "json", "--scan-all",
        ])
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LevelFilter::Warn);

        let config =
            Config::try_parse_from(["portmanteau", "5", "d", "f", "o", "--log-level", "DEBUG"])
                .unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.frequency_filter(), FrequencyFilter::new(5).scan_all());
    }

    #[test]
    fn test_rejects_non_integer_frequency() {
        assert!(Config::try_parse_from(["portmanteau", "many", "d", "f", "o"]).is_err());
        assert!(Config::try_parse_from(["portmanteau", "10", "d", "f"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result =
            Config::try_parse_from(["portmanteau", "10", "d", "f", "o", "--log-level", "verbose"]);
        assert!(result.is_err());
    }
}
