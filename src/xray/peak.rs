//! # 高斯峰形
//!
//! 面积归一的高斯峰，作为能量的纯函数，用于构造模拟谱。
//!
//! ## 公式
//! g(E) = A / (σ √(2π)) · exp(−(E − E0)² / (2σ²))
//! FWHM = 2 √(2 ln 2) σ
//!
//! ## 依赖关系
//! - 被 `commands/intensity.rs` 及测试用于生成模拟谱

use std::f64::consts::PI;

/// 高斯峰
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    /// 峰面积
    pub area: f64,
    /// 峰位（keV）
    pub centre: f64,
    /// 标准差（keV）
    pub sigma: f64,
}

impl Gaussian {
    pub fn new(area: f64, centre: f64, sigma: f64) -> Self {
        Self {
            area,
            centre,
            sigma,
        }
    }

    /// 由半高宽创建
    pub fn from_fwhm(area: f64, centre: f64, fwhm: f64) -> Self {
        Self::new(area, centre, fwhm / (2.0 * (2.0 * 2.0_f64.ln()).sqrt()))
    }

    pub fn fwhm(&self) -> f64 {
        2.0 * (2.0 * 2.0_f64.ln()).sqrt() * self.sigma
    }

    /// 在单个能量处求值
    pub fn value(&self, energy: f64) -> f64 {
        let delta = energy - self.centre;
        self.area / (self.sigma * (2.0 * PI).sqrt())
            * (-delta * delta / (2.0 * self.sigma * self.sigma)).exp()
    }

    /// 在能量轴上求值
    pub fn function(&self, energies: &[f64]) -> Vec<f64> {
        energies.iter().map(|&e| self.value(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_area() {
        let g = Gaussian::new(2.0, 1.0, 0.05);
        let step = 0.001;
        let energies: Vec<f64> = (0..2000).map(|i| i as f64 * step).collect();
        let area: f64 = g.function(&energies).iter().sum::<f64>() * step;
        assert!((area - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_fwhm() {
        let g = Gaussian::from_fwhm(1.0, 0.0, 0.13);
        assert!((g.fwhm() - 0.13).abs() < 1e-12);
        assert!((g.value(0.065) - 0.5 * g.value(0.0)).abs() < 1e-9);
    }
}
