// Batch interactor - Orchestrates the remix of every input file

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::usecases::{JobInputs, PlanJobUseCase};
use crate::output::{report, OutputNamer};
use crate::ports::*;
use crate::utils::time::elapsed_tenths;

/// Interactor for the batch remix use case
pub struct BatchInteractor {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    config_port: Arc<dyn ConfigPort>,
    stats_port: Arc<dyn StatsPort>,
    picker: Box<dyn PickerPort>,
}

impl BatchInteractor {
    /// Create new batch interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        config_port: Arc<dyn ConfigPort>,
        stats_port: Arc<dyn StatsPort>,
        picker: Box<dyn PickerPort>,
    ) -> Self {
        Self {
            probe_port,
            execute_port,
            fs_port,
            config_port,
            stats_port,
            picker,
        }
    }

    /// Resolve every asset list named in the settings
    pub fn catalog(&self, settings: &Settings) -> Result<AssetCatalog, DomainError> {
        let paths = &settings.path;
        Ok(AssetCatalog {
            inputs: self.fs_port.list_dir(&paths.input)?,
            images: self.fs_port.list_image_source(&paths.image)?,
            audios: self.fs_port.list_dir(&paths.audio)?,
            arrows: self.fs_port.list_dir(&paths.arrow)?,
        })
    }

    /// Estimated duration of a batch over the current input folder
    pub fn estimate(&self) -> Result<Estimate, DomainError> {
        let settings = self.config_port.load_settings()?;
        let inputs = self.fs_port.list_dir(&settings.path.input)?;
        let stats = self.stats_port.load_stats()?;
        Ok(stats.estimate(inputs.len()))
    }

    /// Path the next rendered file would be written to
    pub fn next_output_path(&self) -> Result<PathBuf, DomainError> {
        let settings = self.config_port.load_settings()?;
        OutputNamer::new(self.fs_port.as_ref(), &settings.path.output).next_path()
    }

    /// Plan and render one output per input file, then record the run time.
    ///
    /// With `dry_run` the jobs are planned but neither rendered nor counted
    /// in the statistics file.
    pub async fn run(&mut self, dry_run: bool) -> Result<BatchReport, DomainError> {
        let settings = self.config_port.load_settings()?;
        let filters = settings.filter_variants()?;
        let catalog = self.catalog(&settings)?;
        let stats = self.stats_port.load_stats()?;
        let estimate = stats.estimate(catalog.inputs.len());

        info!(
            config = %self.config_port.config_file_path().display(),
            inputs = catalog.inputs.len(),
            arrows = catalog.arrows.len(),
            audios = catalog.audios.len(),
            images = catalog.images.len(),
            filters = filters.len(),
            dry_run,
            "Starting batch"
        );
        println!("{}", report::render_summary(&settings, &filters, &estimate));

        let fs_port = Arc::clone(&self.fs_port);
        let namer = OutputNamer::new(fs_port.as_ref(), &settings.path.output);
        let dry_run_base = if dry_run { namer.next_index()? } else { 0 };

        let started = Instant::now();
        let total = catalog.inputs.len();
        let mut crop = settings.crop_window();
        let mut jobs = Vec::with_capacity(total);

        for (done, input) in catalog.inputs.iter().enumerate() {
            println!("{}", report::processing_line(input));

            let output = if dry_run {
                namer.path_for(dry_run_base + done as u64)
            } else {
                namer.next_path()?
            };
            let job = self
                .plan_job(&settings, &catalog, &filters, input, output, crop)
                .await?;

            if settings.crop.carry_over {
                crop = CropWindow::new(crop.start, job.audio_window.end);
            }

            if !dry_run {
                let rendered = self.execute_port.execute_job(&job).await?;
                info!(
                    output = %rendered.output_path.display(),
                    duration = rendered.duration,
                    seconds = rendered.processing_time.as_secs_f64(),
                    "Rendered output"
                );
            }

            println!("{}", report::completed_line(&job.output, done + 1, total));
            jobs.push(job);
        }

        let elapsed = elapsed_tenths(started.elapsed());
        println!("{}", report::render_timings(&estimate, elapsed));

        if !dry_run {
            self.stats_port.save_stats(&stats.record(elapsed, total))?;
        }
        info!(files = total, elapsed, "Batch finished");

        Ok(BatchReport {
            jobs,
            estimate,
            elapsed,
            dry_run,
        })
    }

    /// Probe and select everything for one input; nothing is written here
    async fn plan_job(
        &mut self,
        settings: &Settings,
        catalog: &AssetCatalog,
        filters: &[FilterVariant],
        input: &Path,
        output: PathBuf,
        crop: CropWindow,
    ) -> Result<RenderJob, DomainError> {
        let video = self.probe_port.probe_media(input).await?;

        let arrow_path = pick(self.picker.as_mut(), "arrow", &catalog.arrows)?;
        let arrow = self.probe_port.probe_media(arrow_path).await?;

        let audio_path = pick(self.picker.as_mut(), "audio", &catalog.audios)?;
        let audio = self.probe_port.probe_media(audio_path).await?;

        let image = pick(self.picker.as_mut(), "image", &catalog.images)?.clone();
        let filter = pick(self.picker.as_mut(), "filter", filters)?.clone();

        info!(
            input = %input.display(),
            arrow = %arrow.path.display(),
            audio = %audio.path.display(),
            image = %image.display(),
            filter = %filter.name,
            crop = %crop,
            "Selected assets"
        );

        PlanJobUseCase::execute(
            settings,
            JobInputs {
                video: &video,
                arrow: &arrow,
                audio: &audio,
                image,
                filter,
                output,
                crop,
            },
        )
    }
}
