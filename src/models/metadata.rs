//! # 元数据树
//!
//! 以显式的类型化分支表示仪器与样品参数:
//!
//! ```text
//! Metadata
//!   ├── title
//!   ├── SEM | TEM        (由 signal_type 决定)
//!   │     ├── beam_energy, tilt_stage
//!   │     └── EDS: live_time, azimuth_angle, elevation_angle, energy_resolution_MnKa
//!   └── Sample
//!         ├── elements    (有序集合)
//!         └── Xray_lines  (有序集合)
//! ```
//!
//! 切换信号类型时整棵仪器分支原样搬迁，数值不做任何修改。
//!
//! ## 依赖关系
//! - 被 `signal/` 使用
//! - 使用 `preferences.rs` 提供的默认值

use crate::error::{EdsError, Result};
use crate::preferences::Preferences;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────
// 信号类型
// ─────────────────────────────────────────────────────────────

/// 信号类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    #[serde(rename = "EDS_SEM")]
    EdsSem,
    #[serde(rename = "EDS_TEM")]
    EdsTem,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::EdsSem => "EDS_SEM",
            SignalType::EdsTem => "EDS_TEM",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SignalType {
    type Err = EdsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EDS_SEM" => Ok(SignalType::EdsSem),
            "EDS_TEM" => Ok(SignalType::EdsTem),
            other => Err(EdsError::UnsupportedSignalType(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 仪器分支
// ─────────────────────────────────────────────────────────────

/// EDS 探测器参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdsParameters {
    /// 采集活时间（秒），未知时为 None
    pub live_time: Option<f64>,
    /// 探测器方位角（度）
    pub azimuth_angle: f64,
    /// 探测器仰角（度）
    pub elevation_angle: f64,
    /// Mn Kα 处的能量分辨率（eV）
    #[serde(rename = "energy_resolution_MnKa")]
    pub energy_resolution_mn_ka: f64,
}

impl EdsParameters {
    fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            live_time: None,
            azimuth_angle: prefs.eds.azimuth_angle,
            elevation_angle: prefs.eds.elevation_angle,
            energy_resolution_mn_ka: prefs.eds.energy_resolution_mn_ka,
        }
    }
}

/// 仪器分支的公共能力
pub trait InstrumentBranch {
    /// 束流能量（kV）
    fn beam_energy(&self) -> f64;
    fn set_beam_energy(&mut self, beam_energy: f64);
    /// 样品台倾转角（度）
    fn tilt_stage(&self) -> f64;
    fn set_tilt_stage(&mut self, tilt: f64);
    fn eds(&self) -> &EdsParameters;
    fn eds_mut(&mut self) -> &mut EdsParameters;
}

/// SEM 仪器分支
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemParameters {
    pub beam_energy: f64,
    pub tilt_stage: f64,
    #[serde(rename = "EDS")]
    pub eds: EdsParameters,
}

/// TEM 仪器分支
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemParameters {
    pub beam_energy: f64,
    pub tilt_stage: f64,
    #[serde(rename = "EDS")]
    pub eds: EdsParameters,
}

macro_rules! impl_instrument_branch {
    ($branch:ty) => {
        impl InstrumentBranch for $branch {
            fn beam_energy(&self) -> f64 {
                self.beam_energy
            }

            fn set_beam_energy(&mut self, beam_energy: f64) {
                self.beam_energy = beam_energy;
            }

            fn tilt_stage(&self) -> f64 {
                self.tilt_stage
            }

            fn set_tilt_stage(&mut self, tilt: f64) {
                self.tilt_stage = tilt;
            }

            fn eds(&self) -> &EdsParameters {
                &self.eds
            }

            fn eds_mut(&mut self) -> &mut EdsParameters {
                &mut self.eds
            }
        }
    };
}

impl_instrument_branch!(SemParameters);
impl_instrument_branch!(TemParameters);

impl From<SemParameters> for TemParameters {
    fn from(sem: SemParameters) -> Self {
        TemParameters {
            beam_energy: sem.beam_energy,
            tilt_stage: sem.tilt_stage,
            eds: sem.eds,
        }
    }
}

impl From<TemParameters> for SemParameters {
    fn from(tem: TemParameters) -> Self {
        SemParameters {
            beam_energy: tem.beam_energy,
            tilt_stage: tem.tilt_stage,
            eds: tem.eds,
        }
    }
}

/// 当前仪器分支，标签即信号类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instrument {
    #[serde(rename = "SEM")]
    Sem(SemParameters),
    #[serde(rename = "TEM")]
    Tem(TemParameters),
}

impl Instrument {
    fn signal_type(&self) -> SignalType {
        match self {
            Instrument::Sem(_) => SignalType::EdsSem,
            Instrument::Tem(_) => SignalType::EdsTem,
        }
    }

    fn branch(&self) -> &dyn InstrumentBranch {
        match self {
            Instrument::Sem(p) => p as &dyn InstrumentBranch,
            Instrument::Tem(p) => p,
        }
    }

    fn branch_mut(&mut self) -> &mut dyn InstrumentBranch {
        match self {
            Instrument::Sem(p) => p as &mut dyn InstrumentBranch,
            Instrument::Tem(p) => p,
        }
    }

    /// 将分支搬迁为目标类型，数值原样保留
    fn relocate(self, target: SignalType) -> Self {
        match (self, target) {
            (Instrument::Sem(p), SignalType::EdsTem) => Instrument::Tem(p.into()),
            (Instrument::Tem(p), SignalType::EdsSem) => Instrument::Sem(p.into()),
            (same, _) => same,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 样品分支
// ─────────────────────────────────────────────────────────────

/// 样品信息
///
/// `elements` 与 `xray_lines` 均为有序集合；每条谱线所属元素必然在 `elements` 中。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sample {
    elements: BTreeSet<String>,
    #[serde(rename = "Xray_lines")]
    xray_lines: BTreeSet<String>,
}

impl Sample {
    pub fn elements(&self) -> &BTreeSet<String> {
        &self.elements
    }

    pub fn xray_lines(&self) -> &BTreeSet<String> {
        &self.xray_lines
    }

    /// 元素列表（升序）
    pub fn element_list(&self) -> Vec<String> {
        self.elements.iter().cloned().collect()
    }

    /// 谱线列表（升序）
    pub fn line_list(&self) -> Vec<String> {
        self.xray_lines.iter().cloned().collect()
    }

    /// 该元素是否已有谱线
    pub fn has_line_for(&self, element: &str) -> bool {
        self.xray_lines
            .iter()
            .any(|l| l.split('_').next() == Some(element))
    }

    pub(crate) fn insert_element(&mut self, element: &str) {
        self.elements.insert(element.to_string());
    }

    /// 加入谱线并补齐所属元素
    pub(crate) fn insert_line(&mut self, element: &str, line: String) {
        self.elements.insert(element.to_string());
        self.xray_lines.insert(line);
    }

    pub(crate) fn clear_elements(&mut self) {
        self.elements.clear();
    }

    pub(crate) fn clear_lines(&mut self) {
        self.xray_lines.clear();
    }

    /// 删除所属元素已不存在的谱线
    pub(crate) fn retain_lines_of_elements(&mut self) {
        let elements = &self.elements;
        self.xray_lines.retain(|l| {
            l.split('_')
                .next()
                .map(|el| elements.contains(el))
                .unwrap_or(false)
        });
    }
}

// ─────────────────────────────────────────────────────────────
// 元数据根节点
// ─────────────────────────────────────────────────────────────

/// 信号元数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    instrument: Instrument,
    #[serde(rename = "Sample")]
    pub sample: Sample,
}

impl Metadata {
    /// 以默认参数创建指定类型的元数据
    pub fn new(signal_type: SignalType, prefs: &Preferences) -> Self {
        let eds = EdsParameters::from_preferences(prefs);
        let instrument = match signal_type {
            SignalType::EdsSem => Instrument::Sem(SemParameters {
                beam_energy: prefs.eds.sem_beam_energy,
                tilt_stage: prefs.eds.tilt_stage,
                eds,
            }),
            SignalType::EdsTem => Instrument::Tem(TemParameters {
                beam_energy: prefs.eds.tem_beam_energy,
                tilt_stage: prefs.eds.tilt_stage,
                eds,
            }),
        };
        Self {
            title: String::new(),
            instrument,
            sample: Sample::default(),
        }
    }

    pub fn signal_type(&self) -> SignalType {
        self.instrument.signal_type()
    }

    /// 当前仪器分支（SEM 或 TEM）
    pub fn instrument(&self) -> &dyn InstrumentBranch {
        self.instrument.branch()
    }

    pub fn instrument_mut(&mut self) -> &mut dyn InstrumentBranch {
        self.instrument.branch_mut()
    }

    pub fn sem(&self) -> Option<&SemParameters> {
        match &self.instrument {
            Instrument::Sem(p) => Some(p),
            Instrument::Tem(_) => None,
        }
    }

    pub fn sem_mut(&mut self) -> Option<&mut SemParameters> {
        match &mut self.instrument {
            Instrument::Sem(p) => Some(p),
            Instrument::Tem(_) => None,
        }
    }

    pub fn tem(&self) -> Option<&TemParameters> {
        match &self.instrument {
            Instrument::Tem(p) => Some(p),
            Instrument::Sem(_) => None,
        }
    }

    pub fn tem_mut(&mut self) -> Option<&mut TemParameters> {
        match &mut self.instrument {
            Instrument::Tem(p) => Some(p),
            Instrument::Sem(_) => None,
        }
    }

    /// 切换信号类型，同类型时不做任何事
    pub fn set_signal_type(&mut self, target: SignalType) {
        if self.signal_type() == target {
            return;
        }
        self.instrument = self.instrument.clone().relocate(target);
    }

    /// 活时间乘以系数（未设置活时间时不变）
    pub(crate) fn scale_live_time(&mut self, factor: f64) {
        if let Some(t) = self.instrument_mut().eds_mut().live_time.as_mut() {
            *t *= factor;
        }
    }
}
