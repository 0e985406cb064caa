//! # 坐标轴数据模型
//!
//! 描述数据数组每一维的物理标定（刻度、偏移、单位、名称），
//! 并区分导航轴（采集位置/时间）与信号轴（能量）。
//!
//! ## 约定
//! - 轴顺序与数组维度顺序一致
//! - 导航轴由外到内排列，信号轴通常为最后一维
//! - 第 i 个采样点的物理值: offset + i · scale
//!
//! ## 依赖关系
//! - 被 `signal/` 使用，在求和、重采样、切片时同步更新
//! - 无外部模块依赖

use crate::error::{EdsError, Result};

use serde::Serialize;

/// 单个标定坐标轴
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataAxis {
    /// 轴名称（如 "Energy", "x"）
    pub name: String,

    /// 物理单位（如 "keV", "nm"）
    pub units: String,

    /// 每个采样间隔对应的物理量，不能为 0
    scale: f64,

    /// 第一个采样点的物理值
    offset: f64,

    /// 采样点数，至少为 1
    size: usize,

    /// 是否为导航轴
    pub navigate: bool,
}

impl DataAxis {
    /// 以单位标定 (scale = 1, offset = 0) 创建坐标轴
    pub fn new(size: usize, navigate: bool) -> Result<Self> {
        if size == 0 {
            return Err(EdsError::ShapeError(
                "axis size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            name: String::new(),
            units: String::new(),
            scale: 1.0,
            offset: 0.0,
            size,
            navigate,
        })
    }

    /// 设置名称与单位
    pub fn with_name(mut self, name: impl Into<String>, units: impl Into<String>) -> Self {
        self.name = name.into();
        self.units = units.into();
        self
    }

    /// 设置刻度与偏移
    pub fn with_calibration(mut self, scale: f64, offset: f64) -> Result<Self> {
        self.calibrate(scale, offset)?;
        Ok(self)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        check_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        check_offset(offset)?;
        self.offset = offset;
        Ok(())
    }

    /// 同时设置刻度与偏移，任何一项无效时不修改
    pub fn calibrate(&mut self, scale: f64, offset: f64) -> Result<()> {
        check_scale(scale)?;
        check_offset(offset)?;
        self.scale = scale;
        self.offset = offset;
        Ok(())
    }

    /// 第 `index` 个采样点的物理值
    pub fn value(&self, index: usize) -> f64 {
        self.offset + index as f64 * self.scale
    }

    /// 全部采样点的物理值
    pub fn values(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.value(i)).collect()
    }

    /// 第一个采样点的物理值
    pub fn low_value(&self) -> f64 {
        self.value(0)
    }

    /// 最后一个采样点的物理值
    pub fn high_value(&self) -> f64 {
        self.value(self.size - 1)
    }

    /// 物理值对应的最近采样点（可能越界，由调用方截断）
    pub fn value_to_index(&self, value: f64) -> isize {
        ((value - self.offset) / self.scale).round() as isize
    }

    /// 合并 `factor` 个相邻采样点
    pub(crate) fn downsample(&mut self, factor: usize) {
        self.size /= factor;
        self.scale *= factor as f64;
    }
}

fn check_scale(scale: f64) -> Result<()> {
    if scale == 0.0 || !scale.is_finite() {
        return Err(EdsError::CalibrationError(format!(
            "axis scale must be finite and non-zero, got {}",
            scale
        )));
    }
    Ok(())
}

fn check_offset(offset: f64) -> Result<()> {
    if !offset.is_finite() {
        return Err(EdsError::CalibrationError(format!(
            "axis offset must be finite, got {}",
            offset
        )));
    }
    Ok(())
}

/// 坐标轴管理器
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AxesManager {
    axes: Vec<DataAxis>,
}

impl AxesManager {
    /// 由坐标轴列表创建
    pub fn new(axes: Vec<DataAxis>) -> Self {
        Self { axes }
    }

    /// 按数组形状创建默认坐标轴: 最后一维为信号轴，其余为导航轴
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        let n = shape.len();
        let axes = shape
            .iter()
            .enumerate()
            .map(|(i, &size)| DataAxis::new(size, i + 1 < n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { axes })
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn axes(&self) -> &[DataAxis] {
        &self.axes
    }

    pub fn axis(&self, index: usize) -> Result<&DataAxis> {
        let n = self.axes.len();
        self.axes.get(index).ok_or_else(|| axis_missing(index, n))
    }

    pub fn axis_mut(&mut self, index: usize) -> Result<&mut DataAxis> {
        let n = self.axes.len();
        self.axes.get_mut(index).ok_or_else(|| axis_missing(index, n))
    }

    /// 数组形状
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.size).collect()
    }

    /// 导航轴（由外到内）
    pub fn navigation_axes(&self) -> Vec<&DataAxis> {
        self.axes.iter().filter(|a| a.navigate).collect()
    }

    /// 信号轴
    pub fn signal_axes(&self) -> Vec<&DataAxis> {
        self.axes.iter().filter(|a| !a.navigate).collect()
    }

    /// 导航轴在数组中的维度序号
    pub fn navigation_indices(&self) -> Vec<usize> {
        (0..self.axes.len()).filter(|&i| self.axes[i].navigate).collect()
    }

    /// 信号轴在数组中的维度序号
    pub fn signal_indices(&self) -> Vec<usize> {
        (0..self.axes.len()).filter(|&i| !self.axes[i].navigate).collect()
    }

    pub fn navigation_shape(&self) -> Vec<usize> {
        self.navigation_axes().iter().map(|a| a.size).collect()
    }

    pub fn signal_shape(&self) -> Vec<usize> {
        self.signal_axes().iter().map(|a| a.size).collect()
    }

    pub fn navigation_dimension(&self) -> usize {
        self.axes.iter().filter(|a| a.navigate).count()
    }

    pub fn signal_dimension(&self) -> usize {
        self.axes.iter().filter(|a| !a.navigate).count()
    }

    /// 移除一个坐标轴
    pub(crate) fn remove(&mut self, index: usize) -> Result<DataAxis> {
        self.axis(index)?;
        Ok(self.axes.remove(index))
    }
}

fn axis_missing(index: usize, len: usize) -> EdsError {
    EdsError::ShapeError(format!(
        "axis {} does not exist (signal has {} axes)",
        index, len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape_splits_navigation_and_signal() {
        let am = AxesManager::from_shape(&[4, 2, 1024]).unwrap();
        assert_eq!(am.shape(), vec![4, 2, 1024]);
        assert_eq!(am.navigation_shape(), vec![4, 2]);
        assert_eq!(am.signal_shape(), vec![1024]);
        assert_eq!(am.navigation_indices(), vec![0, 1]);
        assert_eq!(am.signal_indices(), vec![2]);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            AxesManager::from_shape(&[3, 0]),
            Err(EdsError::ShapeError(_))
        ));
    }

    #[test]
    fn test_axis_values() {
        let axis = DataAxis::new(100, false)
            .unwrap()
            .with_calibration(0.04, -0.1)
            .unwrap()
            .with_name("Energy", "keV");
        assert_eq!(axis.name, "Energy");
        assert_eq!(axis.units, "keV");
        assert!((axis.value(10) - 0.3).abs() < 1e-12);
        assert!((axis.high_value() - 3.86).abs() < 1e-12);
        assert_eq!(axis.value_to_index(0.3), 10);
        assert_eq!(axis.value_to_index(0.319), 10);
        assert_eq!(axis.values().len(), 100);
    }

    #[test]
    fn test_invalid_calibration_leaves_axis_untouched() {
        let mut axis = DataAxis::new(10, false).unwrap();
        axis.calibrate(0.5, 1.0).unwrap();

        assert!(matches!(
            axis.calibrate(0.0, 2.0),
            Err(EdsError::CalibrationError(_))
        ));
        assert!(axis.set_offset(f64::NAN).is_err());
        assert_eq!(axis.scale(), 0.5);
        assert_eq!(axis.offset(), 1.0);
    }

    #[test]
    fn test_downsample() {
        let mut axis = DataAxis::new(8, true).unwrap();
        axis.set_scale(0.5).unwrap();
        axis.downsample(4);
        assert_eq!(axis.size(), 2);
        assert_eq!(axis.scale(), 2.0);
    }
}
