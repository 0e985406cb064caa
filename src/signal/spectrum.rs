//! # EDS 谱信号
//!
//! `EdsSpectrum` 拥有一个 N 维数据数组、描述该数组的坐标轴管理器以及元数据树。
//! 所有派生信号（求和、重采样、切片、复制、类型转换）都是独立的深拷贝。
//!
//! ## 约定
//! - 数组维度数 == 坐标轴个数，且逐维大小一致
//! - 元素/谱线的修改是原子的: 要么全部成功，要么信号保持不变
//!
//! ## 依赖关系
//! - 使用 `models/axes.rs`, `models/metadata.rs`
//! - 使用 `xray/database.rs`, `xray/lines.rs`, `xray/range.rs`
//! - 被 `signal/reduce.rs`, `signal/intensity.rs` 扩展

use crate::error::{EdsError, Result};
use crate::models::{AxesManager, DataAxis, Metadata, SignalType};
use crate::preferences::Preferences;
use crate::xray::database::{BuiltinDatabase, XrayDatabase};
use crate::xray::lines::{LineId, LinePolicy, LineResolver};
use crate::xray::range;

use ndarray::{ArrayD, ArrayViewMutD};

/// EDS 谱（SEM 或 TEM 采集）
#[derive(Debug, Clone, PartialEq)]
pub struct EdsSpectrum {
    data: ArrayD<f64>,
    axes: AxesManager,
    pub metadata: Metadata,
}

impl EdsSpectrum {
    /// 由数据数组创建，坐标轴取单位标定，最后一维为能量轴
    pub fn new(data: ArrayD<f64>, signal_type: SignalType, prefs: &Preferences) -> Result<Self> {
        if data.ndim() == 0 {
            return Err(EdsError::ShapeError(
                "a spectrum needs at least one dimension".to_string(),
            ));
        }
        let axes = AxesManager::from_shape(data.shape())?;
        Ok(Self {
            data,
            axes,
            metadata: Metadata::new(signal_type, prefs),
        })
    }

    /// 创建 SEM 采集的谱
    pub fn sem(data: ArrayD<f64>, prefs: &Preferences) -> Result<Self> {
        Self::new(data, SignalType::EdsSem, prefs)
    }

    /// 创建 TEM 采集的谱
    pub fn tem(data: ArrayD<f64>, prefs: &Preferences) -> Result<Self> {
        Self::new(data, SignalType::EdsTem, prefs)
    }

    /// 以显式坐标轴创建
    pub fn with_axes(
        data: ArrayD<f64>,
        axes: AxesManager,
        signal_type: SignalType,
        prefs: &Preferences,
    ) -> Result<Self> {
        Self::from_parts(data, axes, Metadata::new(signal_type, prefs))
    }

    /// 由三元组组装，校验数组形状与坐标轴一致
    pub(crate) fn from_parts(
        data: ArrayD<f64>,
        axes: AxesManager,
        metadata: Metadata,
    ) -> Result<Self> {
        if data.shape() != axes.shape().as_slice() {
            return Err(EdsError::ShapeError(format!(
                "data shape {:?} does not match axes shape {:?}",
                data.shape(),
                axes.shape()
            )));
        }
        Ok(Self {
            data,
            axes,
            metadata,
        })
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// 可写视图（不能改变形状）
    pub fn data_mut(&mut self) -> ArrayViewMutD<'_, f64> {
        self.data.view_mut()
    }

    pub fn axes(&self) -> &AxesManager {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut AxesManager {
        &mut self.axes
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 能量轴在数组中的维度序号（要求恰好一个信号轴）
    pub fn energy_axis_index(&self) -> Result<usize> {
        match self.axes.signal_indices().as_slice() {
            [index] => Ok(*index),
            other => Err(EdsError::ShapeError(format!(
                "expected exactly one signal (energy) axis, found {}",
                other.len()
            ))),
        }
    }

    pub fn energy_axis(&self) -> Result<&DataAxis> {
        let index = self.energy_axis_index()?;
        self.axes.axis(index)
    }

    pub fn energy_axis_mut(&mut self) -> Result<&mut DataAxis> {
        let index = self.energy_axis_index()?;
        self.axes.axis_mut(index)
    }

    // ─────────────────────────────────────────────────────────────
    // 标定
    // ─────────────────────────────────────────────────────────────

    /// 从另一个信号复制信号轴的刻度、偏移和单位
    pub fn get_calibration_from(&mut self, other: &EdsSpectrum) -> Result<()> {
        let mine = self.axes.signal_indices();
        let theirs = other.axes.signal_axes();
        if mine.len() != theirs.len() {
            return Err(EdsError::ShapeError(format!(
                "cannot copy calibration from {} signal axes onto {}",
                theirs.len(),
                mine.len()
            )));
        }

        let mut axes = self.axes.clone();
        for (index, source) in mine.into_iter().zip(theirs) {
            let axis = axes.axis_mut(index)?;
            axis.calibrate(source.scale(), source.offset())?;
            axis.units = source.units.clone();
        }
        self.axes = axes;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // 信号类型
    // ─────────────────────────────────────────────────────────────

    pub fn signal_type(&self) -> SignalType {
        self.metadata.signal_type()
    }

    /// 切换信号类型（"EDS_SEM" / "EDS_TEM"），仪器分支原样搬迁
    pub fn set_signal_type(&mut self, target: &str) -> Result<()> {
        let target: SignalType = target.parse()?;
        self.metadata.set_signal_type(target);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // 元素与谱线
    // ─────────────────────────────────────────────────────────────

    /// 加入元素（并集）
    pub fn add_elements(&mut self, elements: &[&str]) -> Result<()> {
        let db = BuiltinDatabase;
        for element in elements {
            db.check_element(element)?;
        }
        for element in elements {
            self.metadata.sample.insert_element(element);
        }
        Ok(())
    }

    /// 替换元素集合，并删除所属元素不再存在的谱线
    pub fn set_elements(&mut self, elements: &[&str]) -> Result<()> {
        let db = BuiltinDatabase;
        for element in elements {
            db.check_element(element)?;
        }
        let sample = &mut self.metadata.sample;
        sample.clear_elements();
        for element in elements {
            sample.insert_element(element);
        }
        sample.retain_lines_of_elements();
        Ok(())
    }

    /// 加入谱线
    ///
    /// `lines` 为空时，为每个尚无谱线的元素按当前束流能量和谱仪量程自动选线；
    /// 否则校验每条谱线并加入（所属元素自动加入元素集合）。
    pub fn add_lines(&mut self, lines: &[&str], policy: LinePolicy) -> Result<()> {
        let mut sample = self.metadata.sample.clone();
        let db = BuiltinDatabase;

        if lines.is_empty() {
            let resolver = self.line_resolver(&db);
            let pending: Vec<String> = sample
                .elements()
                .iter()
                .filter(|el| !sample.has_line_for(el))
                .cloned()
                .collect();
            for element in pending {
                for id in resolver.resolve(&element, policy)? {
                    sample.insert_line(id.element(), id.to_string());
                }
            }
        } else {
            for line in lines {
                let id = LineId::parse(line)?;
                db.check_element(id.element())?;
                db.line_energy(&id)?;
                sample.insert_line(id.element(), id.to_string());
            }
        }

        self.metadata.sample = sample;
        Ok(())
    }

    /// 清空谱线后再执行 `add_lines`
    pub fn set_lines(&mut self, lines: &[&str], policy: LinePolicy) -> Result<()> {
        let backup = self.metadata.sample.clone();
        self.metadata.sample.clear_lines();
        if let Err(e) = self.add_lines(lines, policy) {
            self.metadata.sample = backup;
            return Err(e);
        }
        Ok(())
    }

    /// 选线的能量上限: 束流能量与能量轴上限的较小者
    pub fn max_line_energy(&self) -> f64 {
        let beam_energy = self.metadata.instrument().beam_energy();
        match self.energy_axis() {
            Ok(axis) => beam_energy.min(axis.high_value().max(axis.low_value())),
            Err(_) => beam_energy,
        }
    }

    /// 以当前仪器参数构造谱线解析器
    pub(crate) fn line_resolver<'a, D: XrayDatabase + ?Sized>(
        &self,
        db: &'a D,
    ) -> LineResolver<'a, D> {
        LineResolver::new(db, self.metadata.instrument().beam_energy())
            .with_max_energy(self.max_line_energy())
    }

    // ─────────────────────────────────────────────────────────────
    // 几何
    // ─────────────────────────────────────────────────────────────

    /// 探测器出射角（度）
    pub fn get_take_off_angle(&self) -> f64 {
        let instrument = self.metadata.instrument();
        range::take_off_angle(
            instrument.tilt_stage(),
            instrument.eds().azimuth_angle,
            instrument.eds().elevation_angle,
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::IxDyn;

    /// 4 × 2 个位置、1024 道、0–1.023 keV 的 SEM 谱
    pub(crate) fn sem_map() -> EdsSpectrum {
        let mut s = EdsSpectrum::sem(ArrayD::ones(IxDyn(&[4, 2, 1024])), &Preferences::default())
            .unwrap();
        {
            let energy = s.energy_axis_mut().unwrap();
            energy.set_scale(1e-3).unwrap();
            energy.units = "keV".to_string();
            energy.name = "Energy".to_string();
        }
        let sem = s.metadata.sem_mut().unwrap();
        sem.eds.live_time = Some(3.1);
        sem.beam_energy = 15.0;
        sem.tilt_stage = -38.0;
        sem.eds.azimuth_angle = 63.0;
        sem.eds.elevation_angle = 35.0;
        s
    }

    #[test]
    fn test_construction_shape() {
        let s = sem_map();
        assert_eq!(s.shape(), &[4, 2, 1024]);
        assert_eq!(s.axes().navigation_dimension(), 2);
        assert_eq!(s.energy_axis_index().unwrap(), 2);
        assert_eq!(s.signal_type(), SignalType::EdsSem);

        assert!(EdsSpectrum::sem(ArrayD::zeros(IxDyn(&[])), &Preferences::default()).is_err());
    }

    #[test]
    fn test_with_axes_shape_mismatch() {
        let axes = AxesManager::from_shape(&[3, 10]).unwrap();
        let result = EdsSpectrum::with_axes(
            ArrayD::zeros(IxDyn(&[3, 11])),
            axes,
            SignalType::EdsSem,
            &Preferences::default(),
        );
        assert!(matches!(result, Err(EdsError::ShapeError(_))));
    }

    #[test]
    fn test_default_energy_resolution() {
        let s = sem_map();
        let prefs = Preferences::default();
        assert_eq!(
            s.metadata.sem().unwrap().eds.energy_resolution_mn_ka,
            prefs.eds.energy_resolution_mn_ka
        );

        let mut custom = Preferences::default();
        custom.eds.energy_resolution_mn_ka = 128.0;
        let s = EdsSpectrum::sem(ArrayD::ones(IxDyn(&[16])), &custom).unwrap();
        assert_eq!(s.metadata.instrument().eds().energy_resolution_mn_ka, 128.0);
    }

    #[test]
    fn test_add_elements() {
        let mut s = sem_map();
        s.add_elements(&["Al", "Ni"]).unwrap();
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Ni"]);
        s.add_elements(&["Al", "Ni"]).unwrap();
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Ni"]);
        s.add_elements(&["Fe"]).unwrap();
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Fe", "Ni"]);
        s.set_elements(&["Al", "Ni"]).unwrap();
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Ni"]);
        s.set_elements(&["Al", "Ni"]).unwrap();
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Ni"]);
    }

    #[test]
    fn test_add_elements_is_atomic() {
        let mut s = sem_map();
        s.add_elements(&["Al"]).unwrap();
        let result = s.add_elements(&["Fe", "Xx"]);
        assert!(matches!(result, Err(EdsError::UnknownElement(_))));
        assert_eq!(s.metadata.sample.element_list(), vec!["Al"]);

        assert!(s.set_elements(&["Qq"]).is_err());
        assert_eq!(s.metadata.sample.element_list(), vec!["Al"]);
    }

    #[test]
    fn test_add_lines() {
        let mut s = sem_map();
        s.add_lines(&[], LinePolicy::default()).unwrap();
        assert!(s.metadata.sample.line_list().is_empty());

        s.add_lines(&["Fe_Ln"], LinePolicy::default()).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Fe_Ln"]);
        assert_eq!(s.metadata.sample.element_list(), vec!["Fe"]);
        s.add_lines(&["Fe_Ln"], LinePolicy::default()).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Fe_Ln"]);

        s.add_elements(&["Ti"]).unwrap();
        s.add_lines(&[], LinePolicy::default()).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Fe_Ln", "Ti_La"]);

        s.set_lines(&[], LinePolicy::all()).unwrap();
        assert_eq!(
            s.metadata.sample.line_list(),
            vec!["Fe_La", "Fe_Lb3", "Fe_Ll", "Fe_Ln", "Ti_La", "Ti_Lb3", "Ti_Ll", "Ti_Ln"]
        );

        s.metadata.sem_mut().unwrap().beam_energy = 0.4;
        s.set_lines(&[], LinePolicy::all()).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Ti_Ll"]);
    }

    #[test]
    fn test_add_lines_is_atomic() {
        let mut s = sem_map();
        s.add_lines(&["Fe_Ka"], LinePolicy::default()).unwrap();

        let result = s.add_lines(&["Ni_Ka", "Al_La"], LinePolicy::default());
        assert!(matches!(result, Err(EdsError::UnknownLine(_))));
        assert!(matches!(
            s.set_lines(&["Cu Ka"], LinePolicy::default()),
            Err(EdsError::InvalidLineFormat(_))
        ));
        assert_eq!(s.metadata.sample.line_list(), vec!["Fe_Ka"]);
        assert_eq!(s.metadata.sample.element_list(), vec!["Fe"]);
    }

    #[test]
    fn test_set_elements_drops_orphan_lines() {
        let mut s = sem_map();
        s.add_lines(&["Fe_La", "Ni_La"], LinePolicy::default()).unwrap();
        s.set_elements(&["Ni", "Al"]).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Ni_La"]);
        assert_eq!(s.metadata.sample.element_list(), vec!["Al", "Ni"]);
    }

    #[test]
    fn test_sem_to_tem() {
        let mut s = sem_map().inav(&[0, 0]).unwrap();
        s.metadata.sem_mut().unwrap().eds.energy_resolution_mn_ka = 125.3;
        let original = s.metadata.sem().unwrap().clone();

        let mut tem = s.clone();
        tem.set_signal_type("EDS_TEM").unwrap();
        assert_eq!(tem.signal_type(), SignalType::EdsTem);
        assert_eq!(tem.metadata.tem().unwrap().eds.energy_resolution_mn_ka, 125.3);
        assert_eq!(tem.metadata.signal_type().to_string(), "EDS_TEM");
        // 原信号不受影响
        assert_eq!(s.metadata.sem().unwrap(), &original);

        tem.set_signal_type("EDS_TEM").unwrap();
        tem.set_signal_type("EDS_SEM").unwrap();
        assert_eq!(tem.metadata.sem().unwrap(), &original);

        assert!(matches!(
            tem.set_signal_type("EELS"),
            Err(EdsError::UnsupportedSignalType(_))
        ));
        assert_eq!(tem.signal_type(), SignalType::EdsSem);
    }

    #[test]
    fn test_get_calibration_from() {
        let mut s = sem_map();
        let mut scalib = EdsSpectrum::sem(ArrayD::ones(IxDyn(&[1024])), &Preferences::default())
            .unwrap();
        {
            let energy = scalib.energy_axis_mut().unwrap();
            energy.calibrate(0.01, -0.10).unwrap();
            energy.units = "keV".to_string();
        }
        s.get_calibration_from(&scalib).unwrap();

        let mine = s.energy_axis().unwrap();
        let theirs = scalib.energy_axis().unwrap();
        assert_eq!(mine.scale(), theirs.scale());
        assert_eq!(mine.offset(), theirs.offset());
        assert_eq!(mine.units, theirs.units);
        // 导航轴不变
        assert_eq!(s.axes().axis(0).unwrap().scale(), 1.0);
    }

    #[test]
    fn test_get_calibration_from_mismatch() {
        let mut s = sem_map();
        let before = s.axes().clone();

        // 两个信号轴的源信号
        let axes = AxesManager::new(vec![
            DataAxis::new(4, false).unwrap(),
            DataAxis::new(1024, false)
                .unwrap()
                .with_calibration(0.01, -0.10)
                .unwrap()
                .with_name("Energy", "keV"),
        ]);
        let two = EdsSpectrum::with_axes(
            ArrayD::ones(IxDyn(&[4, 1024])),
            axes,
            SignalType::EdsSem,
            &Preferences::default(),
        )
        .unwrap();
        assert!(matches!(
            s.get_calibration_from(&two),
            Err(EdsError::ShapeError(_))
        ));
        assert_eq!(s.axes(), &before);

        // 没有信号轴的源信号
        let total = two.sum(1).unwrap().sum(0).unwrap();
        assert_eq!(total.axes().signal_dimension(), 0);
        assert!(matches!(
            s.get_calibration_from(&total),
            Err(EdsError::ShapeError(_))
        ));
        assert_eq!(s.axes(), &before);
    }

    #[test]
    fn test_bulk_ranges() {
        let mut s = EdsSpectrum::sem(ArrayD::ones(IxDyn(&[1024])), &Preferences::default())
            .unwrap();
        s.metadata.instrument_mut().set_beam_energy(5.0);
        s.set_elements(&["Al", "Zn"]).unwrap();
        s.add_lines(&[], LinePolicy::default()).unwrap();
        assert_eq!(s.metadata.sample.line_list(), vec!["Al_Ka", "Zn_La"]);

        let db = BuiltinDatabase;
        let beam_energy = s.metadata.instrument().beam_energy();
        let lines = s.metadata.sample.line_list();
        let elements = s.metadata.sample.element_list();

        let line = LineId::parse(&lines[0]).unwrap();
        let r = range::xray_range(&db, &line, beam_energy, range::Density::Value(4.37499648818))
            .unwrap();
        assert!((r - 0.19002078834050035).abs() < 1e-12);

        let tilt = s.metadata.instrument().tilt_stage();
        let r = range::electron_range(&db, &elements[0], beam_energy, range::Density::Auto, tilt)
            .unwrap();
        assert!((r - 0.41350651162374225).abs() < 1e-12);
    }

    #[test]
    fn test_take_off_angle() {
        let s = sem_map();
        assert!((s.get_take_off_angle() - 12.886929785732487).abs() < 1e-10);
    }
}
