//! # 电子射程与 X 射线射程估算
//!
//! ## 公式
//! - 电子射程 (Kanaya-Okayama):
//!   R = 0.0276 · A / (Z^0.89 · ρ) · E0^1.67 · cos(tilt)  (µm)
//! - X 射线产生深度 (Anderson-Hasler):
//!   R = 0.064 / ρ · (E0^1.68 − Ec^1.68)  (µm)
//!   这里 Ec 取谱线特征能量
//! - 出射角 (take-off angle):
//!   asin(−cos(90°+tilt)·cos(az)·cos(el) + sin(90°+tilt)·sin(el))
//! - 能量分辨率随能量变化:
//!   FWHM(E) = sqrt(2.5 · (E − E_MnKa) · 1000 + FWHM_MnKa²) / 1000  (keV)
//!
//! ## 参考
//! - K. Kanaya and S. Okayama, J. Phys. D 5 (1972) 43
//! - C. A. Anderson and M. F. Hasler, Proc. 4th Int. Conf. X-ray Optics (1966)
//! - Goldstein et al., Scanning Electron Microscopy and X-ray Microanalysis
//!
//! ## 依赖关系
//! - 被 `signal/spectrum.rs`, `signal/intensity.rs`, `commands/range.rs` 调用
//! - 使用 `xray/database.rs` 查询密度、原子量与谱线能量

use crate::error::{EdsError, Result};
use crate::xray::database::XrayDatabase;
use crate::xray::lines::LineId;

/// Mn Kα 谱线，能量分辨率的参考线
pub const MN_KA: &str = "Mn_Ka";

/// 密度输入
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Density {
    /// 使用数据库中元素的标准密度
    #[default]
    Auto,
    /// 指定密度（g/cm³）
    Value(f64),
}

impl Density {
    fn resolve<D: XrayDatabase + ?Sized>(self, db: &D, element: &str) -> Result<f64> {
        let density = match self {
            Density::Auto => db.density(element)?,
            Density::Value(v) => v,
        };
        if density <= 0.0 || !density.is_finite() {
            return Err(EdsError::InvalidArgument(format!(
                "density must be positive, got {}",
                density
            )));
        }
        Ok(density)
    }
}

/// 电子在样品中的穿透深度（µm）
pub fn electron_range<D: XrayDatabase + ?Sized>(
    db: &D,
    element: &str,
    beam_energy: f64,
    density: Density,
    tilt: f64,
) -> Result<f64> {
    db.check_element(element)?;
    let density = density.resolve(db, element)?;
    let z = db.atomic_number(element)? as f64;
    let a = db.atomic_weight(element)?;

    Ok(0.0276 * a / z.powf(0.89) / density
        * beam_energy.powf(1.67)
        * tilt.to_radians().cos())
}

/// X 射线产生范围（µm），不做倾转修正
pub fn xray_range<D: XrayDatabase + ?Sized>(
    db: &D,
    line: &LineId,
    beam_energy: f64,
    density: Density,
) -> Result<f64> {
    let density = density.resolve(db, line.element())?;
    let line_energy = db.line_energy(line)?.energy;

    Ok(0.064 / density * (beam_energy.powf(1.68) - line_energy.powf(1.68)))
}

/// 探测器出射角（度）
pub fn take_off_angle(tilt_stage: f64, azimuth_angle: f64, elevation_angle: f64) -> f64 {
    let a = (90.0 + tilt_stage).to_radians();
    let b = azimuth_angle.to_radians();
    let c = elevation_angle.to_radians();

    (-a.cos() * b.cos() * c.cos() + a.sin() * c.sin())
        .asin()
        .to_degrees()
}

/// 给定能量处的峰宽 FWHM（keV）
///
/// `resolution_mn_ka` 为 Mn Kα 处的能量分辨率（eV），`energy` 单位 keV。
pub fn fwhm_at_energy<D: XrayDatabase + ?Sized>(
    db: &D,
    resolution_mn_ka: f64,
    energy: f64,
) -> Result<f64> {
    let mn_ka = LineId::parse(MN_KA)?;
    let reference = db.line_energy(&mn_ka)?.energy;
    let variance = 2.5 * (energy - reference) * 1000.0 + resolution_mn_ka * resolution_mn_ka;
    Ok(variance.max(0.0).sqrt() / 1000.0)
}
