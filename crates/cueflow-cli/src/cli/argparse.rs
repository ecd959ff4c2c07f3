use std::path::PathBuf;

use clap::Parser;

pub fn get_args() -> CliOpts {
    CliOpts::parse()
}

#[derive(Parser, Debug)]
#[command(name = "cueflow", version, about = "Subtitle and lyric cue engine")]
pub struct CliOpts {
    /// Diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    /// Sniff the subtitle format of a file
    Detect(DetectOpts),

    /// Parse a subtitle file and print the result as JSON
    Parse(ParseOpts),

    /// Convert a subtitle file to SRT or VTT
    Convert(ConvertOpts),

    /// Resolve the active cue at a playback time
    Resolve(ResolveOpts),

    /// Segment word timings into subtitle lines
    Segment(SegmentOpts),

    /// Load a track from a catalog file and print a summary
    Tracks(TracksOpts),
}

#[derive(Parser, Debug)]
pub struct DetectOpts {
    /// Subtitle file to sniff
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ParseOpts {
    /// Subtitle file to parse
    pub input: PathBuf,

    /// Format hint overriding detection (srt, vtt, txt)
    #[arg(long)]
    pub format: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug)]
pub struct ConvertOpts {
    /// Subtitle file to convert
    pub input: PathBuf,

    /// Target format (srt or vtt)
    #[arg(long)]
    pub to: String,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Format hint for the input
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ResolveOpts {
    /// Subtitle file to parse
    pub input: PathBuf,

    /// Playback time in seconds
    #[arg(long)]
    pub time: f64,

    /// Cues to include before the active one
    #[arg(long, default_value_t = 2)]
    pub before: usize,

    /// Cues to include after the active one
    #[arg(long, default_value_t = 2)]
    pub after: usize,

    /// Format hint for the input
    #[arg(long)]
    pub format: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser, Debug)]
pub struct SegmentOpts {
    /// Word timings JSON file: [{"word", "start", "end"}, ...]
    pub input: PathBuf,

    /// Output shape: srt, vtt, or lyrics (JSON document)
    #[arg(long, default_value = "lyrics")]
    pub emit: String,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Maximum words per subtitle line
    #[arg(long)]
    pub words_per_line: Option<usize>,

    /// Minimum seconds a line stays on screen
    #[arg(long)]
    pub min_line_duration: Option<f64>,

    /// Maximum seconds a line may span before a forced break
    #[arg(long)]
    pub max_line_duration: Option<f64>,

    /// Silence gap in seconds that forces a line break
    #[arg(long)]
    pub pause_threshold: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct TracksOpts {
    /// Track catalog JSON file: [{"id", "fileUrl", "format", "label", "isDefault"}, ...]
    pub catalog: PathBuf,

    /// Track id to load; the catalog default when omitted
    #[arg(long)]
    pub select: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
