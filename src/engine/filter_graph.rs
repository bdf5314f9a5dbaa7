//! Filter graph construction for one render job

use crate::domain::model::RenderJob;
use crate::engine::inputs::{ARROW, AUDIO, BASE, IMAGE};
use crate::engine::{AUDIO_OUT, VIDEO_OUT};

/// Format seconds for filter arguments
fn secs(value: f64) -> String {
    format!("{:.3}", value)
}

/// Base clip: trim, reset timestamps, fade in, mirror
fn base_chain(job: &RenderJob) -> String {
    let mut filters = vec![
        format!(
            "trim=start={}:end={}",
            secs(job.video_window.start),
            secs(job.video_window.end)
        ),
        "setpts=PTS-STARTPTS".to_string(),
    ];
    if job.fade_in > 0.0 {
        filters.push(format!("fade=t=in:st=0:d={}", secs(job.fade_in)));
    }
    if job.mirror {
        filters.push("hflip".to_string());
    }
    format!("[{}:v]{}[base]", BASE, filters.join(","))
}

/// Arrow: scale to fixed height, rotate clockwise on a transparent canvas
fn arrow_chain(job: &RenderJob) -> String {
    let angle = format!("{}*PI/180", job.arrow.rotation_deg);
    format!(
        "[{}:v]scale=-1:{},format=rgba,rotate={a}:c=none:ow=rotw({a}):oh=roth({a})[arrow]",
        ARROW,
        job.arrow.height,
        a = angle
    )
}

fn image_chain(job: &RenderJob) -> String {
    format!(
        "[{}:v]scale=iw*{s}:ih*{s}[image]",
        IMAGE,
        s = job.image.scale
    )
}

/// Image centred horizontally, visible over `[start, end)`
fn image_overlay(job: &RenderJob) -> String {
    let start = job.image.start;
    let end = start + job.image.duration;
    format!(
        "[base][image]overlay=x=(W-w)/2:y=H*{}:enable='gte(t,{})*lt(t,{})':shortest=1[with_image]",
        job.image.y_frac,
        secs(start),
        secs(end)
    )
}

fn arrow_overlay(job: &RenderJob) -> String {
    format!(
        "[with_image][arrow]overlay=x=W*{:.6}:y=H*{:.6}:shortest=1[composed]",
        job.arrow.x_frac, job.arrow.y_frac
    )
}

/// User-selected filter chain on the composited video
fn user_chain(job: &RenderJob) -> String {
    let graph = job.filter.graph.trim();
    let graph = if graph.is_empty() { "null" } else { graph };
    format!("[composed]{}[{}]", graph, VIDEO_OUT)
}

fn audio_chain(job: &RenderJob) -> String {
    format!(
        "[{}:a]atrim=start={}:end={},asetpts=PTS-STARTPTS[{}]",
        AUDIO,
        secs(job.audio_window.start),
        secs(job.audio_window.end),
        AUDIO_OUT
    )
}

/// Complete `-filter_complex` value for a job
pub fn build(job: &RenderJob) -> String {
    [
        base_chain(job),
        arrow_chain(job),
        image_chain(job),
        image_overlay(job),
        arrow_overlay(job),
        user_chain(job),
        audio_chain(job),
    ]
    .join(";")
}
