//! # 谱线强度积分
//!
//! 对每条谱线，在特征能量附近的窗口内沿能量轴积分，得到一张强度图。
//! 强度图移除能量轴，保留全部导航轴与元数据。
//!
//! ## 窗口
//! 半宽 = window_factor × FWHM(E) / 2，其中 FWHM 由 Mn Kα 分辨率外推。
//! 窗口两端取最近的采样点（含端点），越出能量轴的部分被截断。
//!
//! ## 依赖关系
//! - 扩展 `signal/spectrum.rs` 中的 `EdsSpectrum`
//! - 使用 `xray/database.rs`, `xray/range.rs`
//! - 被 `xray/export.rs`, `commands/intensity.rs` 使用

use super::spectrum::EdsSpectrum;
use crate::error::{EdsError, Result};
use crate::models::{AxesManager, Metadata};
use crate::xray::database::{BuiltinDatabase, XrayDatabase};
use crate::xray::lines::{LineId, LinePolicy};
use crate::xray::range;

use ndarray::{ArrayD, Axis, Slice};

/// 单条谱线的强度图
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMap {
    /// 谱线
    pub line: LineId,
    /// 特征能量（keV）
    pub energy: f64,
    /// 实际积分的能量范围（keV）
    pub window: (f64, f64),
    data: ArrayD<f64>,
    axes: AxesManager,
    pub metadata: Metadata,
}

impl IntensityMap {
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn axes(&self) -> &AxesManager {
        &self.axes
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

impl EdsSpectrum {
    /// 计算谱线强度图
    ///
    /// `lines` 为 `None` 时使用元数据中的谱线；元数据中没有谱线时，
    /// 为每个元素自动选取一条主线。
    pub fn get_lines_intensity(
        &self,
        lines: Option<&[&str]>,
        window_factor: f64,
    ) -> Result<Vec<IntensityMap>> {
        if !(window_factor.is_finite() && window_factor > 0.0) {
            return Err(EdsError::InvalidArgument(format!(
                "integration window factor must be positive, got {}",
                window_factor
            )));
        }

        let db = BuiltinDatabase;
        let lines = match lines {
            Some(requested) => requested
                .iter()
                .map(|l| LineId::parse(l))
                .collect::<Result<Vec<_>>>()?,
            None => self.default_lines(&db)?,
        };
        if lines.is_empty() {
            return Err(EdsError::NoLines);
        }

        let energy_index = self.energy_axis_index()?;
        let energy_axis = self.energy_axis()?;
        let resolution = self.metadata.instrument().eds().energy_resolution_mn_ka;
        let last = energy_axis.size() as isize - 1;

        let mut axes = self.axes().clone();
        axes.remove(energy_index)?;

        let mut maps = Vec::with_capacity(lines.len());
        for line in lines {
            db.check_element(line.element())?;
            let energy = db.line_energy(&line)?.energy;
            let half_width = window_factor * range::fwhm_at_energy(&db, resolution, energy)? / 2.0;

            let a = energy_axis.value_to_index(energy - half_width);
            let b = energy_axis.value_to_index(energy + half_width);
            let (lo, hi) = (a.min(b), a.max(b));
            if hi < 0 || lo > last {
                return Err(EdsError::LineOutOfRange {
                    line: line.to_string(),
                    energy,
                    low: energy_axis.low_value().min(energy_axis.high_value()),
                    high: energy_axis.low_value().max(energy_axis.high_value()),
                });
            }
            let (lo, hi) = (lo.max(0) as usize, hi.min(last) as usize);

            let data = self
                .data()
                .slice_axis(Axis(energy_index), Slice::from(lo..hi + 1))
                .sum_axis(Axis(energy_index))
                * energy_axis.scale().abs();

            let mut metadata = self.metadata.clone();
            metadata.title = format!(
                "Intensity of {} at {:.2} keV from {}",
                line, energy, self.metadata.title
            );

            maps.push(IntensityMap {
                energy,
                window: (energy_axis.value(lo), energy_axis.value(hi)),
                line,
                data,
                axes: axes.clone(),
                metadata,
            });
        }
        Ok(maps)
    }

    /// 元数据中的谱线；为空时由元素自动选取
    fn default_lines<D: XrayDatabase + ?Sized>(&self, db: &D) -> Result<Vec<LineId>> {
        let sample = &self.metadata.sample;
        if !sample.xray_lines().is_empty() {
            return sample.xray_lines().iter().map(|l| LineId::parse(l)).collect();
        }
        self.line_resolver(db).resolve_all(
            sample.elements().iter().map(String::as_str),
            LinePolicy::new(true, true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Preferences;
    use crate::xray::peak::Gaussian;
    use ndarray::IxDyn;

    /// 2 × 2 × 3 个位置，每个位置都是 Al Kα 附近面积为 1 的高斯峰
    fn al_map() -> EdsSpectrum {
        let peak = Gaussian::new(1.0, 1.487, 0.05);
        let data = ArrayD::from_shape_fn(IxDyn(&[2, 2, 3, 100]), |index| {
            peak.value(index[3] as f64 * 0.04)
        });
        let mut s = EdsSpectrum::sem(data, &Preferences::default()).unwrap();
        {
            let energy = s.energy_axis_mut().unwrap();
            energy.set_scale(0.04).unwrap();
            energy.units = "keV".to_string();
        }
        let sem = s.metadata.sem_mut().unwrap();
        sem.eds.live_time = Some(3.1);
        sem.beam_energy = 15.0;
        s.metadata.title = "Al map".to_string();
        s
    }

    fn assert_unit_intensity(s: &EdsSpectrum, navigation_shape: &[usize]) {
        let maps = s.get_lines_intensity(Some(&["Al_Ka"][..]), 5.0).unwrap();
        assert_eq!(maps.len(), 1);
        let map = &maps[0];
        assert_eq!(map.shape(), navigation_shape);
        assert_eq!(map.axes().len(), navigation_shape.len());
        for &value in map.data().iter() {
            assert!((value - 1.0).abs() < 1e-3, "intensity {}", value);
        }
    }

    #[test]
    fn test_intensity_three_navigation_dimensions() {
        assert_unit_intensity(&al_map(), &[2, 2, 3]);
    }

    #[test]
    fn test_intensity_after_indexing() {
        let s = al_map();
        assert_unit_intensity(&s.inav(&[0]).unwrap(), &[2, 3]);
        assert_unit_intensity(&s.inav(&[0, 1]).unwrap(), &[3]);
        assert_unit_intensity(&s.inav(&[1, 1, 2]).unwrap(), &[]);
    }

    #[test]
    fn test_intensity_metadata() {
        let s = al_map();
        let maps = s.get_lines_intensity(Some(&["Al_Ka"][..]), 5.0).unwrap();
        let map = &maps[0];
        assert_eq!(map.line.to_string(), "Al_Ka");
        assert!(map.metadata.title.starts_with("Intensity of Al_Ka"));
        assert!(map.metadata.title.ends_with("from Al map"));
        assert_eq!(map.metadata.instrument().eds().live_time, Some(3.1));
        assert!((map.window.0 - 1.28).abs() < 1e-9);
        assert!((map.window.1 - 1.68).abs() < 1e-9);
        assert_eq!(map.axes().navigation_dimension(), 3);
    }

    #[test]
    fn test_intensity_uses_metadata_lines() {
        let mut s = al_map();
        assert!(matches!(
            s.get_lines_intensity(None, 5.0),
            Err(EdsError::NoLines)
        ));

        s.add_elements(&["Al"]).unwrap();
        let maps = s.get_lines_intensity(None, 5.0).unwrap();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].line.to_string(), "Al_Ka");

        s.add_lines(&["Al_Ka"], LinePolicy::default()).unwrap();
        let maps = s.get_lines_intensity(None, 5.0).unwrap();
        assert_eq!(maps[0].line.to_string(), "Al_Ka");
    }

    #[test]
    fn test_intensity_errors() {
        let s = al_map();
        assert!(matches!(
            s.get_lines_intensity(Some(&["Fe_Ka"][..]), 5.0),
            Err(EdsError::LineOutOfRange { .. })
        ));
        assert!(matches!(
            s.get_lines_intensity(Some(&["Al_Ka"][..]), 0.0),
            Err(EdsError::InvalidArgument(_))
        ));
        assert!(matches!(
            s.get_lines_intensity(Some(&["Xx_Ka"][..]), 5.0),
            Err(EdsError::UnknownElement(_))
        ));
        let empty: &[&str] = &[];
        assert!(matches!(
            s.get_lines_intensity(Some(empty), 5.0),
            Err(EdsError::NoLines)
        ));
    }
}
