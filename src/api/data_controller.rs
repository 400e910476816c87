use tracing::{debug, warn};

use crate::core::{Sample, is_sorted_by_x};
use crate::render::Renderer;

use super::{PlotEngine, region_cache::RegionCache};

impl<R: Renderer> PlotEngine<R> {
    /// Replaces the sample sequence and rebuilds boundaries and areas.
    ///
    /// Samples are expected in non-decreasing `x` order and are not re-sorted.
    pub fn set_data(&mut self, samples: Vec<Sample>) {
        if !is_sorted_by_x(&samples) {
            warn!(
                original_count = samples.len(),
                "samples are not sorted by x; regions and fit may be wrong"
            );
        }
        let data_version = self.regions.data_version() + 1;
        self.regions = RegionCache::rebuild(&samples, data_version);
        self.samples = samples;
        debug!(
            original_count = self.samples.len(),
            boundary_count = self.regions.boundaries().len(),
            data_version,
            "set data samples"
        );
    }

    /// Drops all samples; the engine then has nothing to render.
    pub fn clear_data(&mut self) {
        self.set_data(Vec::new());
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Incremented on every data replacement.
    #[must_use]
    pub fn data_version(&self) -> u64 {
        self.regions.data_version()
    }
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::api::{PlotEngine, PlotEngineConfig};
    use crate::core::{Sample, Viewport};
    use crate::render::NullRenderer;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unsorted_input_is_logged_with_sample_counts() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let mut engine = PlotEngine::new(
            NullRenderer::default(),
            PlotEngineConfig::new(Viewport::new(10, 10)),
        )
        .expect("engine init");

        tracing::subscriber::with_default(subscriber, || {
            engine.set_data(vec![Sample::new(1.0, 1.0), Sample::new(0.0, -1.0)]);
        });

        let bytes = log.0.lock().expect("log buffer").clone();
        let text = String::from_utf8(bytes).expect("utf8 log");
        assert!(text.contains("WARN"));
        assert!(text.contains("samples are not sorted by x"));
        assert!(text.contains("original_count=2"));
        assert!(text.contains("boundary_count=1"));
    }
}
