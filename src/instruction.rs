//! The canonical, renderer-agnostic output of translation.

use std::fmt;
use std::str::FromStr;

use crate::value::{PropMap, Value};

/// Formatting functions known to the drawing layer.
///
/// The pipeline only carries the tag and its ordered parameters; resolving
/// it to text is the job of a [`crate::render::ValueFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    Distance,
    Direction360,
    Decimal,
    Speed,
    Time,
    DateTime,
    Date,
    LonLats,
}

impl Formatter {
    pub const ALL: [Formatter; 8] = [
        Formatter::Distance,
        Formatter::Direction360,
        Formatter::Decimal,
        Formatter::Speed,
        Formatter::Time,
        Formatter::DateTime,
        Formatter::Date,
        Formatter::LonLats,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Formatter::Distance => "formatDistance",
            Formatter::Direction360 => "formatDirection360",
            Formatter::Decimal => "formatDecimal",
            Formatter::Speed => "formatSpeed",
            Formatter::Time => "formatTime",
            Formatter::DateTime => "formatDateTime",
            Formatter::Date => "formatDate",
            Formatter::LonLats => "formatLonLats",
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formatter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formatter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or(())
    }
}

/// Sub-renderer selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererId {
    /// Caption / value / unit text
    #[default]
    ThreeValueText,
    CompassGauge,
    WindDial,
    SpeedGauge,
    DepthGauge,
    TemperatureGauge,
    VoltageGauge,
    PositionCoordinates,
}

impl RendererId {
    pub const ALL: [RendererId; 8] = [
        RendererId::ThreeValueText,
        RendererId::CompassGauge,
        RendererId::WindDial,
        RendererId::SpeedGauge,
        RendererId::DepthGauge,
        RendererId::TemperatureGauge,
        RendererId::VoltageGauge,
        RendererId::PositionCoordinates,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RendererId::ThreeValueText => "ThreeValueText",
            RendererId::CompassGauge => "CompassGauge",
            RendererId::WindDial => "WindDial",
            RendererId::SpeedGauge => "SpeedGauge",
            RendererId::DepthGauge => "DepthGauge",
            RendererId::TemperatureGauge => "TemperatureGauge",
            RendererId::VoltageGauge => "VoltageGauge",
            RendererId::PositionCoordinates => "PositionCoordinates",
        }
    }

    /// Look up a renderer by name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        RendererId::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to paint. Every field is optional; an instruction with nothing set
/// is the valid "no data" instruction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderInstruction {
    pub value: Option<Value>,
    pub caption: Option<String>,
    pub unit: Option<String>,
    pub formatter: Option<Formatter>,
    pub formatter_parameters: Option<Vec<Value>>,
    /// Absent means the default text renderer
    pub renderer: Option<RendererId>,
    /// Overlaid onto the base fields when painting
    pub renderer_props: Option<PropMap>,
}

impl RenderInstruction {
    /// The "no data" instruction
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Route this instruction to a specific sub-renderer
    pub fn with_renderer(mut self, renderer: RendererId, props: PropMap) -> Self {
        self.renderer = Some(renderer);
        self.renderer_props = Some(props);
        self
    }

    /// The instruction as a property map, omitting absent fields
    pub fn to_props(&self) -> PropMap {
        let mut map = PropMap::new();
        if let Some(value) = &self.value {
            map.insert("value".into(), value.clone());
        }
        if let Some(caption) = &self.caption {
            map.insert("caption".into(), Value::from(caption.as_str()));
        }
        if let Some(unit) = &self.unit {
            map.insert("unit".into(), Value::from(unit.as_str()));
        }
        if let Some(formatter) = self.formatter {
            map.insert("formatter".into(), Value::from(formatter.as_str()));
        }
        if let Some(params) = &self.formatter_parameters {
            map.insert("formatterParameters".into(), Value::List(params.clone()));
        }
        if let Some(renderer) = self.renderer {
            map.insert("renderer".into(), Value::from(renderer.as_str()));
        }
        if let Some(props) = &self.renderer_props {
            map.insert("rendererProps".into(), Value::Map(props.clone()));
        }
        map
    }
}

impl fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.to_props() {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
