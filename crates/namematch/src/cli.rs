//! Command-line arguments and command dispatch

use crate::config::load_optional;
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use namematch_core::{distance, EditCosts, MatchConfig};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "namematch")]
#[command(about = "Decide whether differently formatted names denote the same person")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// JSON match config (aliases, strip words, patterns)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fold candidate names into the base name and print the canonical name
    Match {
        /// Base name
        base: String,

        /// Candidate names, matched in order
        #[arg(required = true)]
        candidates: Vec<String>,

        #[command(flatten)]
        options: ConfigArgs,
    },

    /// Print the chunks a name is split into, one per line
    Normalize {
        name: String,

        #[command(flatten)]
        options: ConfigArgs,
    },

    /// Print the weighted edit distance between two strings
    Distance {
        a: String,
        b: String,

        #[arg(long, default_value_t = 1.0)]
        insert: f64,

        #[arg(long, default_value_t = 1.0)]
        delete: f64,

        #[arg(long, default_value_t = 1.0)]
        substitute: f64,

        #[arg(long, default_value_t = 1.0)]
        transpose: f64,
    },
}

/// Config given on the command line, layered over the config file
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Alias expansion, e.g. bob=Robert (repeatable)
    #[arg(long = "alias", value_name = "KEY=VALUE", value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,

    /// Prefix word to strip, e.g. Doctor (repeatable)
    #[arg(long = "strip-prefix", value_name = "WORD")]
    pub strip_prefix: Vec<String>,

    /// Suffix word to strip, e.g. PhD (repeatable)
    #[arg(long = "strip-suffix", value_name = "WORD")]
    pub strip_suffix: Vec<String>,

    /// Prefix regex; replaces any prefix words
    #[arg(long, value_name = "REGEX")]
    pub prefix_pattern: Option<String>,

    /// Suffix regex; replaces any suffix words
    #[arg(long, value_name = "REGEX")]
    pub suffix_pattern: Option<String>,
}

impl ConfigArgs {
    pub fn to_config(&self) -> MatchConfig {
        let mut config = MatchConfig::new()
            .with_prefix_words(self.strip_prefix.iter().cloned())
            .with_suffix_words(self.strip_suffix.iter().cloned());
        for (alias, expansion) in &self.aliases {
            config.aliases.insert(alias, expansion.clone());
        }
        config.prefix_pattern = self.prefix_pattern.clone();
        config.suffix_pattern = self.suffix_pattern.clone();
        config
    }
}

fn parse_alias(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("invalid alias '{}': expected KEY=VALUE", s)),
    }
}

impl Cli {
    /// Config file contents with command-line options layered on top
    fn resolve_config(&self, options: &ConfigArgs) -> Result<MatchConfig> {
        let mut config = load_optional(self.config.as_deref())?;
        config.merge(options.to_config());
        Ok(config)
    }

    /// Run the selected command.
    ///
    /// Returns the text to print, or `None` when `match` finds no match.
    pub fn run(&self) -> Result<Option<String>> {
        match &self.command {
            Command::Match {
                base,
                candidates,
                options,
            } => {
                let matcher = self.resolve_config(options)?.compile()?;
                info!(base = %base, candidates = candidates.len(), "matching names");
                let name = matcher.match_names(base, candidates);
                debug!(matched = name.is_some(), "match finished");
                Ok(name)
            }
            Command::Normalize { name, options } => {
                let normalizer = self.resolve_config(options)?.compile_normalizer()?;
                Ok(Some(normalizer.normalize(name).texts().join("\n")))
            }
            Command::Distance {
                a,
                b,
                insert,
                delete,
                substitute,
                transpose,
            } => {
                let costs = EditCosts {
                    insert: *insert,
                    delete: *delete,
                    substitute: *substitute,
                    transpose: *transpose,
                };
                Ok(Some(distance(a, b, &costs)?.to_string()))
            }
        }
    }
}
