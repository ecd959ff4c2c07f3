pub mod argparse;

use std::path::Path;

use anyhow::Context;

mod source {
    //! File-backed fetch capability for local track catalogs.

    use async_trait::async_trait;
    use cueflow_core::tracks::SubtitleSource;
    use cueflow_core::{EngineError, EngineResult};

    pub(crate) struct FileSource;

    #[async_trait]
    impl SubtitleSource for FileSource {
        async fn fetch(&self, url: &str) -> EngineResult<String> {
            let path = url.strip_prefix("file://").unwrap_or(url);
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| EngineError::FetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
        }
    }
}

mod inspect {
    use cueflow_core::subtitles::{detect_format, parse_subtitles};

    use super::argparse;
    use super::{emit_json, read_input};

    pub(crate) fn detect(args: &argparse::DetectOpts) -> anyhow::Result<()> {
        let content = read_input(&args.input)?;
        println!("{}", detect_format(&content).as_str());
        Ok(())
    }

    pub(crate) fn parse(args: &argparse::ParseOpts) -> anyhow::Result<()> {
        let content = read_input(&args.input)?;
        let parsed = parse_subtitles(&content, args.format.as_deref());
        tracing::debug!("Parsed {} cues as {}", parsed.len(), parsed.format.as_str());
        emit_json(&parsed, args.pretty)
    }
}

mod convert {
    use cueflow_core::subtitles::{parse_subtitles, write_srt, write_vtt};

    use super::argparse;
    use super::{read_input, write_output};

    pub(crate) fn convert(args: &argparse::ConvertOpts) -> anyhow::Result<()> {
        let content = read_input(&args.input)?;
        let parsed = parse_subtitles(&content, args.format.as_deref());

        let rendered = match args.to.to_ascii_lowercase().as_str() {
            "srt" => write_srt(&parsed.cues),
            "vtt" | "webvtt" => write_vtt(&parsed.cues),
            other => anyhow::bail!("unsupported target format: {other} (expected srt or vtt)"),
        };

        write_output(args.out.as_deref(), &rendered)
    }
}

mod playback {
    use cueflow_core::subtitles::parse_subtitles;
    use cueflow_core::sync::{context_window, resolve_active};

    use super::argparse;
    use super::{emit_json, read_input};

    pub(crate) fn resolve(args: &argparse::ResolveOpts) -> anyhow::Result<()> {
        let content = read_input(&args.input)?;
        let parsed = parse_subtitles(&content, args.format.as_deref());

        let active = resolve_active(&parsed.cues, args.time);
        let window = context_window(
            &parsed.cues,
            active.map(|a| a.index),
            args.before,
            args.after,
        );

        let payload = serde_json::json!({
            "time": args.time,
            "active": active,
            "context": window,
        });
        emit_json(&payload, args.pretty)
    }
}

mod lyrics {
    use cueflow_core::lyrics::LyricsDocument;
    use cueflow_core::segment::{parse_word_timings, segment_words, SegmenterOptions};
    use cueflow_core::subtitles::{write_srt, write_vtt};

    use super::argparse;
    use super::{read_input, write_output};

    pub(crate) fn segment(args: &argparse::SegmentOpts) -> anyhow::Result<()> {
        let json = read_input(&args.input)?;
        let words = parse_word_timings(&json)?;
        let options = options_from(args);
        tracing::debug!("Segmenting {} words", words.len());

        let cues = segment_words(&words, &options);
        let rendered = match args.emit.to_ascii_lowercase().as_str() {
            "srt" => write_srt(&cues),
            "vtt" | "webvtt" => write_vtt(&cues),
            "lyrics" | "json" => {
                let doc = LyricsDocument::from_cues(cues, words.len());
                serde_json::to_string_pretty(&doc)?
            }
            other => anyhow::bail!("unsupported output shape: {other} (expected srt, vtt, or lyrics)"),
        };

        write_output(args.out.as_deref(), &rendered)
    }

    fn options_from(args: &argparse::SegmentOpts) -> SegmenterOptions {
        let mut options = SegmenterOptions::default();
        if let Some(n) = args.words_per_line {
            options.words_per_line = n;
        }
        if let Some(v) = args.min_line_duration {
            options.min_line_duration = v;
        }
        if let Some(v) = args.max_line_duration {
            options.max_line_duration = v;
        }
        if let Some(v) = args.pause_threshold {
            options.pause_threshold = v;
        }
        options.normalize();
        options
    }
}

mod tracks {
    use anyhow::Context;
    use cueflow_core::tracks::{SubtitleTrack, TrackCatalog, TrackSession};
    use cueflow_core::EngineError;

    use super::argparse;
    use super::source::FileSource;
    use super::{emit_json, read_input};

    pub(crate) async fn load(args: &argparse::TracksOpts) -> anyhow::Result<()> {
        let json = read_input(&args.catalog)?;
        let entries: Vec<SubtitleTrack> = serde_json::from_str(&json)
            .with_context(|| format!("invalid track catalog: {}", args.catalog.display()))?;
        let catalog = TrackCatalog::new(entries);

        let track = match &args.select {
            Some(id) => catalog
                .get(id)
                .ok_or_else(|| EngineError::TrackNotFound(id.clone()))?,
            None => catalog.default_track().context("track catalog is empty")?,
        };
        tracing::info!("Loading track {} ({})", track.id, track.label);

        let mut session = TrackSession::new();
        if !session.load_track(&FileSource, track).await {
            anyhow::bail!("failed to load track {}", track.id);
        }
        let parsed = session.current().context("no track content installed")?;

        let payload = serde_json::json!({
            "trackId": track.id,
            "label": track.label,
            "format": parsed.format,
            "cueCount": parsed.len(),
            "hasTimestamps": parsed.has_timestamps,
            "duration": parsed.duration(),
        });
        emit_json(&payload, args.pretty)
    }
}

pub async fn run_cli(args: &argparse::CliOpts) -> anyhow::Result<()> {
    match &args.subcmd {
        argparse::SubCommand::Detect(opts) => inspect::detect(opts),
        argparse::SubCommand::Parse(opts) => inspect::parse(opts),
        argparse::SubCommand::Convert(opts) => convert::convert(opts),
        argparse::SubCommand::Resolve(opts) => playback::resolve(opts),
        argparse::SubCommand::Segment(opts) => lyrics::segment(opts),
        argparse::SubCommand::Tracks(opts) => tracks::load(opts).await,
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn emit_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            cueflow_core::fs::atomic_write_text(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
