//! # 降维与切片
//!
//! 求和、重采样（块求和）与单索引切片。每个操作都返回新的独立信号，
//! 同时更新坐标轴标定，并按合并的采集位置数放大活时间。
//!
//! ## 活时间规则
//! - `sum`: live_time × 被移除轴的大小
//! - `rebin`: live_time × 全部导航轴下采样因子之积
//! - 切片不修改活时间
//!
//! ## 依赖关系
//! - 扩展 `signal/spectrum.rs` 中的 `EdsSpectrum`

use super::spectrum::EdsSpectrum;
use crate::error::{EdsError, Result};

use ndarray::{ArrayD, ArrayViewD, Axis, Dimension, IxDyn};

impl EdsSpectrum {
    /// 沿 `axis` 求和并移除该轴
    pub fn sum(&self, axis: usize) -> Result<EdsSpectrum> {
        let mut axes = self.axes().clone();
        let removed = axes.remove(axis)?;
        let data = self.data().sum_axis(Axis(axis));

        let mut metadata = self.metadata.clone();
        metadata.scale_live_time(removed.size() as f64);
        EdsSpectrum::from_parts(data, axes, metadata)
    }

    /// 块求和重采样
    ///
    /// `new_shape` 的维数必须与当前一致，且每一维都能整除原大小。
    pub fn rebin(&self, new_shape: &[usize]) -> Result<EdsSpectrum> {
        let old_shape = self.shape();
        if new_shape.len() != old_shape.len() {
            return Err(EdsError::ShapeError(format!(
                "rebin shape {:?} has {} dimensions, signal has {}",
                new_shape,
                new_shape.len(),
                old_shape.len()
            )));
        }

        let mut factors = Vec::with_capacity(new_shape.len());
        for (dim, (&old, &new)) in old_shape.iter().zip(new_shape).enumerate() {
            if new == 0 || old % new != 0 {
                return Err(EdsError::ShapeError(format!(
                    "cannot rebin axis {} from {} to {}: not an integer factor",
                    dim, old, new
                )));
            }
            factors.push(old / new);
        }

        let mut data = ArrayD::<f64>::zeros(IxDyn(new_shape));
        let mut target = vec![0usize; new_shape.len()];
        for (index, &value) in self.data().indexed_iter() {
            for ((t, &i), &f) in target.iter_mut().zip(index.slice()).zip(&factors) {
                *t = i / f;
            }
            data[IxDyn(&target)] += value;
        }

        let mut axes = self.axes().clone();
        let mut navigation_factor = 1.0;
        for (dim, &factor) in factors.iter().enumerate() {
            let axis = axes.axis_mut(dim)?;
            if axis.navigate {
                navigation_factor *= factor as f64;
            }
            axis.downsample(factor);
        }

        let mut metadata = self.metadata.clone();
        metadata.scale_live_time(navigation_factor);
        EdsSpectrum::from_parts(data, axes, metadata)
    }

    /// 在导航轴 `axis` 上取第 `index` 个位置，该维被移除
    pub fn index_axis(&self, axis: usize, index: usize) -> Result<EdsSpectrum> {
        let size = {
            let target = self.axes().axis(axis)?;
            if !target.navigate {
                return Err(EdsError::ShapeError(format!(
                    "axis {} is a signal axis and cannot be indexed",
                    axis
                )));
            }
            target.size()
        };
        if index >= size {
            return Err(EdsError::IndexOutOfRange { axis, index, size });
        }

        let data = self.data().index_axis(Axis(axis), index).to_owned();
        let mut axes = self.axes().clone();
        axes.remove(axis)?;
        EdsSpectrum::from_parts(data, axes, self.metadata.clone())
    }

    /// 按导航坐标（由外到内）依次切片
    ///
    /// 可以只给出前几个导航轴的坐标，其余导航轴保留。
    pub fn inav(&self, position: &[usize]) -> Result<EdsSpectrum> {
        let targets = self.navigation_targets(position)?;
        let mut current = self.clone();
        for &(axis, index) in targets.iter().rev() {
            current = current.index_axis(axis, index)?;
        }
        Ok(current)
    }

    /// 单个采集位置处的谱，借用原数组不复制
    ///
    /// 返回的视图与信号共享存储，且不携带元数据；需要独立信号时使用 `inav`。
    pub fn spectrum_view(&self, position: &[usize]) -> Result<ArrayViewD<'_, f64>> {
        let targets = self.navigation_targets(position)?;
        if targets.len() != self.axes().navigation_dimension() {
            return Err(EdsError::ShapeError(format!(
                "position needs {} navigation coordinates, got {}",
                self.axes().navigation_dimension(),
                targets.len()
            )));
        }

        let mut view = self.data().view();
        for &(axis, index) in targets.iter().rev() {
            view = view.index_axis_move(Axis(axis), index);
        }
        Ok(view)
    }

    /// 将导航坐标映射为 (维度序号, 索引)，并做边界检查
    fn navigation_targets(&self, position: &[usize]) -> Result<Vec<(usize, usize)>> {
        let navigation = self.axes().navigation_indices();
        if position.len() > navigation.len() {
            return Err(EdsError::ShapeError(format!(
                "got {} navigation coordinates for {} navigation axes",
                position.len(),
                navigation.len()
            )));
        }

        navigation
            .into_iter()
            .zip(position)
            .map(|(axis, &index)| {
                let size = self.axes().axis(axis)?.size();
                if index >= size {
                    Err(EdsError::IndexOutOfRange { axis, index, size })
                } else {
                    Ok((axis, index))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EdsError;
    use crate::signal::spectrum::tests::sem_map;

    #[test]
    fn test_sum_live_time() {
        let s = sem_map();
        assert!(matches!(s.sum(3), Err(EdsError::ShapeError(_))));
        let summed = s.sum(1).unwrap();
        assert_eq!(summed.metadata.sem().unwrap().eds.live_time, Some(3.1 * 2.0));
        assert_eq!(summed.shape(), &[4, 1024]);
        assert_eq!(summed.data()[[0, 0]], 2.0);

        let summed = s.sum(0).unwrap();
        assert_eq!(summed.metadata.sem().unwrap().eds.live_time, Some(3.1 * 4.0));

        // 原信号不变
        assert_eq!(s.metadata.sem().unwrap().eds.live_time, Some(3.1));
    }

    #[test]
    fn test_sum_energy_axis() {
        let s = sem_map();
        let total = s.sum(2).unwrap();
        assert_eq!(total.shape(), &[4, 2]);
        assert_eq!(total.data()[[3, 1]], 1024.0);
        assert_eq!(total.axes().signal_dimension(), 0);
        assert_eq!(total.metadata.sem().unwrap().eds.live_time, Some(3.1 * 1024.0));
    }

    #[test]
    fn test_rebin_live_time() {
        let s = sem_map();
        let rebinned = s.rebin(&[2, 1, 1024]).unwrap();
        assert_eq!(
            rebinned.metadata.sem().unwrap().eds.live_time,
            Some(3.1 * 2.0 * 2.0)
        );
        assert_eq!(rebinned.shape(), &[2, 1, 1024]);
        assert_eq!(rebinned.data()[[1, 0, 10]], 4.0);
        assert_eq!(rebinned.axes().axis(0).unwrap().scale(), 2.0);
        assert_eq!(rebinned.axes().axis(1).unwrap().scale(), 2.0);
        assert_eq!(rebinned.energy_axis().unwrap().scale(), 1e-3);
    }

    #[test]
    fn test_rebin_energy_axis() {
        let s = sem_map();
        let rebinned = s.rebin(&[4, 2, 256]).unwrap();
        assert_eq!(rebinned.metadata.sem().unwrap().eds.live_time, Some(3.1));
        assert!((rebinned.energy_axis().unwrap().scale() - 4e-3).abs() < 1e-15);
        assert_eq!(rebinned.data()[[0, 0, 0]], 4.0);
    }

    #[test]
    fn test_rebin_rejects_bad_shapes() {
        let s = sem_map();
        assert!(matches!(s.rebin(&[3, 2, 1024]), Err(EdsError::ShapeError(_))));
        assert!(matches!(s.rebin(&[4, 2]), Err(EdsError::ShapeError(_))));
        assert!(matches!(s.rebin(&[0, 2, 1024]), Err(EdsError::ShapeError(_))));
    }

    #[test]
    fn test_inav() {
        let mut s = sem_map();
        s.data_mut()[[2, 1, 7]] = 5.0;

        let one = s.inav(&[2]).unwrap();
        assert_eq!(one.shape(), &[2, 1024]);
        assert_eq!(one.axes().navigation_dimension(), 1);

        let point = s.inav(&[2, 1]).unwrap();
        assert_eq!(point.shape(), &[1024]);
        assert_eq!(point.axes().navigation_dimension(), 0);
        assert_eq!(point.data()[[7]], 5.0);
        assert_eq!(point.metadata, s.metadata);

        assert!(matches!(
            s.inav(&[4]),
            Err(EdsError::IndexOutOfRange { axis: 0, index: 4, size: 4 })
        ));
        assert!(s.inav(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_index_signal_axis_rejected() {
        let s = sem_map();
        assert!(matches!(s.index_axis(2, 0), Err(EdsError::ShapeError(_))));
    }

    #[test]
    fn test_spectrum_view() {
        let mut s = sem_map();
        s.data_mut()[[1, 0, 3]] = 9.0;
        let view = s.spectrum_view(&[1, 0]).unwrap();
        assert_eq!(view.shape(), &[1024]);
        assert_eq!(view[[3]], 9.0);
        assert!(s.spectrum_view(&[1]).is_err());
    }
}
