//! ffmpeg argument vector for one render job

use std::ffi::OsString;

use crate::domain::model::RenderJob;
use crate::engine::{filter_graph, AUDIO_CODEC, AUDIO_OUT, PIXEL_FORMAT, VIDEO_CODEC, VIDEO_OUT};

/// Build the full ffmpeg argument list; progress is reported as key=value lines on stdout
pub fn build_args(job: &RenderJob) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |values: &[&str]| args.extend(values.iter().map(OsString::from));

    push(&["-hide_banner", "-nostats", "-loglevel", "error"]);
    push(&["-progress", "pipe:1", "-y"]);

    args.push("-i".into());
    args.push(job.input.clone().into_os_string());

    args.extend(["-stream_loop", "-1", "-i"].map(OsString::from));
    args.push(job.arrow.path.clone().into_os_string());

    args.extend(["-loop", "1", "-i"].map(OsString::from));
    args.push(job.image.path.clone().into_os_string());

    args.push("-i".into());
    args.push(job.audio.clone().into_os_string());

    args.push("-filter_complex".into());
    args.push(filter_graph::build(job).into());

    for arg in [
        "-map".to_string(),
        format!("[{}]", VIDEO_OUT),
        "-map".to_string(),
        format!("[{}]", AUDIO_OUT),
        "-c:v".to_string(),
        VIDEO_CODEC.to_string(),
        "-pix_fmt".to_string(),
        PIXEL_FORMAT.to_string(),
        "-c:a".to_string(),
        AUDIO_CODEC.to_string(),
        "-t".to_string(),
        format!("{:.3}", job.duration()),
    ] {
        args.push(arg.into());
    }

    args.push(job.output.clone().into_os_string());
    args
}

/// Printable form of the argument list for logs and dry runs
pub fn display_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
