//! Chart handles and the slots that own them.
//!
//! A [`CanvasSlot`] stands in for a canvas element: it owns at most one live
//! [`ChartHandle`]. Binding a new chart destroys the previous handle first;
//! widgets that keep a chart for the page's lifetime update it in place.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Doughnut,
    Line,
}

/// One series plus the styling cues the data source supplied for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    /// One colour for the whole series, or one per data point (pie slices).
    pub background: Vec<String>,
    pub border_color: Option<String>,
    pub fill: bool,
    pub border_width: f64,
    pub bar_thickness: Option<f64>,
    pub border_radius: Option<f64>,
}

impl Dataset {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.background = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Colour for data point `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> &str {
        if self.background.is_empty() {
            return "#6B7280";
        }
        &self.background[index % self.background.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub show_legend: bool,
    /// Inner radius as a fraction of the outer radius (doughnuts only).
    pub cutout: f64,
    pub stacked: bool,
    pub show_x_grid: bool,
    pub show_y_grid: bool,
    pub show_y_ticks: bool,
    pub show_axes: bool,
    pub begin_at_zero: bool,
    pub tooltips: bool,
    /// Curve smoothing for line charts, 0 draws straight segments.
    pub tension: f64,
    pub height: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            cutout: 0.0,
            stacked: false,
            show_x_grid: true,
            show_y_grid: true,
            show_y_ticks: true,
            show_axes: true,
            begin_at_zero: true,
            tooltips: true,
            tension: 0.0,
            height: 160.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind,
            labels,
            datasets,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    serial: u64,
    config: ChartConfig,
    revision: u32,
}

impl ChartHandle {
    fn create(serial: u64, config: ChartConfig) -> Self {
        Self {
            serial,
            config,
            revision: 0,
        }
    }

    /// Identifies the chart instance; unchanged by in-place updates.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Number of in-place redraws since creation.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replace labels and series data, keep styling, redraw.
    pub fn update(&mut self, labels: Vec<String>, data: Vec<Vec<f64>>) {
        self.config.labels = labels;
        for (dataset, values) in self.config.datasets.iter_mut().zip(data) {
            dataset.data = values;
        }
        self.revision = self.revision.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSlot {
    canvas_id: String,
    handle: Option<ChartHandle>,
    created: u64,
    destroyed: u64,
}

impl CanvasSlot {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            handle: None,
            created: 0,
            destroyed: 0,
        }
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn handle(&self) -> Option<&ChartHandle> {
        self.handle.as_ref()
    }

    /// Handles torn down by this slot so far.
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    /// Create a fresh chart, destroying whatever was bound before.
    pub fn bind(&mut self, config: ChartConfig) -> &ChartHandle {
        self.release();
        self.created += 1;
        self.handle.insert(ChartHandle::create(self.created, config))
    }

    /// Update the bound chart in place, or create it on first use.
    pub fn update_or_bind(&mut self, config: ChartConfig) {
        match self.handle.as_mut() {
            Some(handle) => {
                let data = config.datasets.into_iter().map(|ds| ds.data).collect();
                handle.update(config.labels, data);
            }
            None => {
                self.bind(config);
            }
        }
    }

    /// Destroy and drop the bound chart, if any.
    pub fn release(&mut self) {
        if self.handle.take().is_some() {
            self.destroyed += 1;
        }
    }
}
