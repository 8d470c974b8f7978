use std::path::PathBuf;

use clap::Parser;
use logfilter_core::{layout_help, DEFAULT_DELIMITER, DEFAULT_SORT_KEY};

#[derive(Parser, Debug)]
#[command(name = "logfilter", version, about = "Filter logs from a log file")]
#[command(disable_version_flag = true)]
#[command(help_template = "{name} {version} - {about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}")]
#[command(after_help = format!(
    "Experimental exercise with Check Point logs coming from fw1-loggrabber - expected format:\n\n{}",
    layout_help()
))]
pub struct Cli {
    /// Log file to use. If none is used, read from stdin
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Character to split
    #[arg(short = 's', value_name = "CHAR", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Order by: time, srcip, srcport, dstip, dstport
    #[arg(short = 'o', value_name = "KEY", default_value = DEFAULT_SORT_KEY)]
    pub order_by: String,
}
