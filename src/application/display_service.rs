use crate::{
    domain::{
        config::DisplayConfig,
        errors::{DisplayError, DisplayResult},
        layout::{RowAssigner, RowLayout, row_capacity},
        logging::LogComponent,
        sequence::{Feature, FeatureNormalizer, FeatureRecord, Sequence},
        viewport::{ContainerGeometry, LinearScale, ViewState, VisibleWindow},
    },
    infrastructure::rendering::{
        Scene,
        geometry::{axis, feature_bar, letters_visible, sequence_letters},
        labels::{feature_label, is_visible},
        render_svg,
    },
    log_debug, log_info, log_warn,
};

/// Owned state of one sequence strip.
///
/// Every host event maps to one method here; each runs to completion and
/// ends with a full redraw of the scene.
#[derive(Debug, Clone)]
pub struct SeqDisplayService {
    config: DisplayConfig,
    container: Option<ContainerGeometry>,
    sequence: Sequence,
    features: Vec<Feature>,
    layout: RowLayout,
    view: ViewState,
    scale: LinearScale,
    scene: Scene,
}

impl SeqDisplayService {
    pub fn new(config: DisplayConfig) -> Self {
        let view = ViewState::new(config.min_zoom, config.max_zoom);
        Self {
            config,
            container: None,
            sequence: Sequence::default(),
            features: Vec::new(),
            layout: RowLayout::default(),
            view,
            scale: LinearScale::default(),
            scene: Scene::default(),
        }
    }

    /// Attach to a measured display region. Must precede `load`.
    pub fn init(&mut self, width: f64, height: f64) -> DisplayResult<()> {
        self.reset(width, height)?;
        log_info!(
            LogComponent::Application("SeqDisplay"),
            "initialized {}x{} container with {} rows",
            width,
            height,
            self.layout.nrows
        );
        Ok(())
    }

    /// Clear all shapes and re-read the container size. Stored sequence and
    /// features are kept; zoom and pan return to the identity.
    pub fn reset(&mut self, width: f64, height: f64) -> DisplayResult<()> {
        let container = measured(width, height)?;
        self.scene.clear();
        self.scene.resize(container.width, container.height);
        self.container = Some(container);
        self.layout.nrows = row_capacity(&self.config, container.height);
        self.view.reset();
        Ok(())
    }

    /// Replace the sequence and/or the features, then lay out and redraw.
    ///
    /// `None` keeps the previous value. All validation happens before any
    /// state is replaced.
    pub fn load(&mut self, sequence: Option<&str>, features: Option<&[FeatureRecord]>) -> DisplayResult<&Scene> {
        let container = self.container.ok_or_else(|| {
            DisplayError::Container("init must be called before load".to_string())
        })?;

        let new_sequence = sequence.map(Sequence::new);
        let seq_len = new_sequence.as_ref().unwrap_or(&self.sequence).len();
        let normalizer = FeatureNormalizer::new(seq_len);

        let new_features = match features {
            Some(records) => Some(normalizer.from_records(records)?),
            None => {
                if new_sequence.is_some() {
                    normalizer.revalidate(&self.features)?;
                }
                None
            }
        };

        if let Some(seq) = new_sequence {
            self.sequence = seq;
        }
        if let Some(features) = new_features {
            self.features = features;
        }

        self.layout = RowAssigner::new(row_capacity(&self.config, container.height)).assign(&mut self.features);
        if self.layout.overflow > 0 {
            log_warn!(
                LogComponent::Application("SeqDisplay"),
                "{} features did not fit into {} rows",
                self.layout.overflow,
                self.layout.nrows
            );
        }
        self.scale = LinearScale::for_sequence(self.sequence.len(), &container, self.config.margin);

        log_debug!(
            LogComponent::Application("SeqDisplay"),
            "loaded {} letters, {} features",
            self.sequence.len(),
            self.features.len()
        );
        Ok(self.redraw())
    }

    /// Host resize: re-measure, then re-run the layout with stored data.
    pub fn resize(&mut self, width: f64, height: f64) -> DisplayResult<&Scene> {
        self.reset(width, height)?;
        self.load(None, None)
    }

    /// Absolute zoom/translate as delivered by a zoom gesture.
    pub fn zoom_to(&mut self, zoom: f64, translate_px: f64) -> &Scene {
        let width = self.effective_width();
        self.view.set_transform(zoom, translate_px, width);
        self.redraw()
    }

    /// Relative zoom around a cursor given in container pixels.
    pub fn zoom_at(&mut self, factor: f64, cursor_x: f64) -> &Scene {
        let width = self.effective_width();
        self.view.zoom_at(factor, cursor_x - self.config.margin, width);
        self.redraw()
    }

    pub fn pan_by(&mut self, delta_px: f64) -> &Scene {
        let width = self.effective_width();
        self.view.pan(delta_px, width);
        self.redraw()
    }

    /// Throw away every shape and regenerate the scene for the current view.
    pub fn redraw(&mut self) -> &Scene {
        self.scene.clear();

        let Some(container) = self.renderable_container() else {
            log_debug!(LogComponent::Application("SeqDisplay"), "nothing to render yet");
            return &self.scene;
        };

        let seq_len = self.sequence.len();
        let domain = self.view.visible_domain(seq_len, self.effective_width());
        self.scale.set_domain(domain);
        self.scale.set_range((self.config.margin, container.width - self.config.margin));
        let window = self.scale.window();
        let nrows = self.layout.nrows;

        let visible: Vec<&Feature> = self.features.iter().filter(|f| is_visible(f, window)).collect();

        self.scene.bars = visible
            .iter()
            .map(|f| feature_bar(f, &self.scale, &self.config, container.height, nrows))
            .collect();
        self.scene.labels = visible
            .iter()
            .filter_map(|f| feature_label(f, &self.scale, &self.config, container.height, nrows))
            .collect();
        if letters_visible(&self.scale, &self.config) {
            self.scene.letters =
                sequence_letters(&self.sequence, window, &self.scale, &self.config, container.height);
        }
        self.scene.axis = Some(axis(&self.scale, &self.config, container.height));

        log_debug!(
            LogComponent::Application("SeqDisplay"),
            "redrew {} shapes for window {}..={}",
            self.scene.shape_count(),
            window.start,
            window.end
        );
        &self.scene
    }

    pub fn svg(&self) -> String {
        render_svg(&self.scene)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    pub fn nrows(&self) -> usize {
        self.layout.nrows
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn container(&self) -> Option<ContainerGeometry> {
        self.container
    }

    pub fn visible_window(&self) -> VisibleWindow {
        self.scale.window()
    }

    /// 1-indexed sequence position under a container x coordinate.
    pub fn position_at(&self, x: f64) -> Option<usize> {
        let pos = self.scale.invert(x).round();
        (pos >= 1.0 && pos <= self.sequence.len() as f64).then_some(pos as usize)
    }

    fn effective_width(&self) -> f64 {
        self.container.map(|c| c.effective_width(self.config.margin)).unwrap_or(0.0)
    }

    /// Zero-size containers and empty sequences render nothing.
    fn renderable_container(&self) -> Option<ContainerGeometry> {
        let container = self.container?;
        let usable = self.effective_width() > 0.0 && self.layout.nrows > 0 && !self.sequence.is_empty();
        usable.then_some(container)
    }
}

impl Default for SeqDisplayService {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

fn measured(width: f64, height: f64) -> DisplayResult<ContainerGeometry> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(DisplayError::Container(format!("unusable container size {}x{}", width, height)));
    }
    Ok(ContainerGeometry::new(width, height))
}
