//! # X 射线谱线与元素数据库
//!
//! 提供元素的基本物理性质（原子序数、原子量、密度）以及特征 X 射线谱线
//! 能量和对应的临界激发能（吸收边）。
//!
//! ## 数据来源
//! - 谱线能量: J. A. Bearden, Rev. Mod. Phys. 39 (1967) 78
//! - 吸收边: Bearden & Burr, Rev. Mod. Phys. 39 (1967) 125
//! - 密度: 室温单质密度 (g/cm³)
//!
//! ## 依赖关系
//! - 被 `xray/lines.rs`, `xray/range.rs` 调用
//! - 被 `signal/` 通过 `XrayDatabase` trait 使用
//! - 纯静态数据，无外部依赖

use crate::error::{EdsError, Result};
use crate::xray::lines::LineId;

use std::collections::HashMap;
use std::sync::LazyLock;

/// 单条特征谱线
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineData {
    /// 谱线名称 (Siegbahn 记号，如 "Ka", "Lb3")
    pub name: &'static str,
    /// 谱线能量（keV）
    pub energy: f64,
    /// 临界激发能（初态能级吸收边，keV）
    pub critical_energy: f64,
}

/// 元素数据
#[derive(Debug, Clone, Copy)]
pub struct ElementData {
    pub atomic_number: u32,
    /// 原子量（g/mol）
    pub atomic_weight: f64,
    /// 密度（g/cm³）
    pub density: f64,
    pub lines: &'static [LineData],
}

/// 查询得到的谱线能量信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEnergy {
    /// 特征能量（keV）
    pub energy: f64,
    /// 临界激发能（keV）
    pub critical_energy: f64,
}

/// 物理数据库接口
///
/// 谱线解析和射程估算只通过这个接口访问数据，
/// 内置实现为 [`BuiltinDatabase`]。
pub trait XrayDatabase {
    /// 元素是否存在于数据库中
    fn contains_element(&self, symbol: &str) -> bool;

    fn atomic_number(&self, symbol: &str) -> Result<u32>;

    /// 原子量（g/mol）
    fn atomic_weight(&self, symbol: &str) -> Result<f64>;

    /// 标准密度（g/cm³）
    fn density(&self, symbol: &str) -> Result<f64>;

    /// 元素所有已知谱线名称（数据库顺序）
    fn line_names(&self, symbol: &str) -> Result<Vec<String>>;

    /// 查询谱线的特征能量与临界激发能
    fn line_energy(&self, line: &LineId) -> Result<LineEnergy>;

    /// 校验元素符号
    fn check_element(&self, symbol: &str) -> Result<()> {
        if self.contains_element(symbol) {
            Ok(())
        } else {
            Err(EdsError::UnknownElement(symbol.to_string()))
        }
    }
}

/// 内置元素数据库（基于静态表 [`ELEMENTS`]）
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDatabase;

impl BuiltinDatabase {
    fn element(&self, symbol: &str) -> Result<&'static ElementData> {
        ELEMENTS
            .get(symbol)
            .ok_or_else(|| EdsError::UnknownElement(symbol.to_string()))
    }
}

impl XrayDatabase for BuiltinDatabase {
    fn contains_element(&self, symbol: &str) -> bool {
        ELEMENTS.contains_key(symbol)
    }

    fn atomic_number(&self, symbol: &str) -> Result<u32> {
        Ok(self.element(symbol)?.atomic_number)
    }

    fn atomic_weight(&self, symbol: &str) -> Result<f64> {
        Ok(self.element(symbol)?.atomic_weight)
    }

    fn density(&self, symbol: &str) -> Result<f64> {
        Ok(self.element(symbol)?.density)
    }

    fn line_names(&self, symbol: &str) -> Result<Vec<String>> {
        Ok(self
            .element(symbol)?
            .lines
            .iter()
            .map(|l| l.name.to_string())
            .collect())
    }

    fn line_energy(&self, line: &LineId) -> Result<LineEnergy> {
        let data = self.element(line.element())?;
        data.lines
            .iter()
            .find(|l| l.name == line.line())
            .map(|l| LineEnergy {
                energy: l.energy,
                critical_energy: l.critical_energy,
            })
            .ok_or_else(|| EdsError::UnknownLine(line.to_string()))
    }
}

/// 元素数据表
pub static ELEMENTS: LazyLock<HashMap<&'static str, ElementData>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        // 铍 (Be)
        m.insert(
            "Be",
            ElementData {
                atomic_number: 4,
                atomic_weight: 9.012182,
                density: 1.848,
                lines: &[
                    LineData { name: "Ka", energy: 0.1085, critical_energy: 0.1115 },
                ],
            },
        );

        // 硼 (B)
        m.insert(
            "B",
            ElementData {
                atomic_number: 5,
                atomic_weight: 10.811,
                density: 2.46,
                lines: &[
                    LineData { name: "Ka", energy: 0.1833, critical_energy: 0.188 },
                ],
            },
        );

        // 碳 (C)
        m.insert(
            "C",
            ElementData {
                atomic_number: 6,
                atomic_weight: 12.0107,
                density: 2.267,
                lines: &[
                    LineData { name: "Ka", energy: 0.2774, critical_energy: 0.2842 },
                ],
            },
        );

        // 氮 (N)
        m.insert(
            "N",
            ElementData {
                atomic_number: 7,
                atomic_weight: 14.0067,
                density: 0.0012506,
                lines: &[
                    LineData { name: "Ka", energy: 0.3924, critical_energy: 0.4099 },
                ],
            },
        );

        // 氧 (O)
        m.insert(
            "O",
            ElementData {
                atomic_number: 8,
                atomic_weight: 15.9994,
                density: 0.001429,
                lines: &[
                    LineData { name: "Ka", energy: 0.5249, critical_energy: 0.5431 },
                ],
            },
        );

        // 氟 (F)
        m.insert(
            "F",
            ElementData {
                atomic_number: 9,
                atomic_weight: 18.9984032,
                density: 0.001696,
                lines: &[
                    LineData { name: "Ka", energy: 0.6768, critical_energy: 0.6967 },
                ],
            },
        );

        // 钠 (Na)
        m.insert(
            "Na",
            ElementData {
                atomic_number: 11,
                atomic_weight: 22.98976928,
                density: 0.968,
                lines: &[
                    LineData { name: "Ka", energy: 1.041, critical_energy: 1.0721 },
                    LineData { name: "Kb", energy: 1.0711, critical_energy: 1.0721 },
                ],
            },
        );

        // 镁 (Mg)
        m.insert(
            "Mg",
            ElementData {
                atomic_number: 12,
                atomic_weight: 24.305,
                density: 1.738,
                lines: &[
                    LineData { name: "Ka", energy: 1.2536, critical_energy: 1.305 },
                    LineData { name: "Kb", energy: 1.3022, critical_energy: 1.305 },
                ],
            },
        );

        // 铝 (Al)
        m.insert(
            "Al",
            ElementData {
                atomic_number: 13,
                atomic_weight: 26.9815386,
                density: 2.7,
                lines: &[
                    LineData { name: "Ka", energy: 1.487, critical_energy: 1.5596 },
                    LineData { name: "Kb", energy: 1.5575, critical_energy: 1.5596 },
                ],
            },
        );

        // 硅 (Si)
        m.insert(
            "Si",
            ElementData {
                atomic_number: 14,
                atomic_weight: 28.0855,
                density: 2.3296,
                lines: &[
                    LineData { name: "Ka", energy: 1.7397, critical_energy: 1.8389 },
                    LineData { name: "Kb", energy: 1.8359, critical_energy: 1.8389 },
                ],
            },
        );

        // 磷 (P)
        m.insert(
            "P",
            ElementData {
                atomic_number: 15,
                atomic_weight: 30.973762,
                density: 1.823,
                lines: &[
                    LineData { name: "Ka", energy: 2.0133, critical_energy: 2.1455 },
                    LineData { name: "Kb", energy: 2.1391, critical_energy: 2.1455 },
                ],
            },
        );

        // 硫 (S)
        m.insert(
            "S",
            ElementData {
                atomic_number: 16,
                atomic_weight: 32.065,
                density: 1.96,
                lines: &[
                    LineData { name: "Ka", energy: 2.3072, critical_energy: 2.472 },
                    LineData { name: "Kb", energy: 2.464, critical_energy: 2.472 },
                ],
            },
        );

        // 氯 (Cl)
        m.insert(
            "Cl",
            ElementData {
                atomic_number: 17,
                atomic_weight: 35.453,
                density: 0.003214,
                lines: &[
                    LineData { name: "Ka", energy: 2.6224, critical_energy: 2.8224 },
                    LineData { name: "Kb", energy: 2.8156, critical_energy: 2.8224 },
                ],
            },
        );

        // 钾 (K)
        m.insert(
            "K",
            ElementData {
                atomic_number: 19,
                atomic_weight: 39.0983,
                density: 0.856,
                lines: &[
                    LineData { name: "Ka", energy: 3.3138, critical_energy: 3.6074 },
                    LineData { name: "Kb", energy: 3.5896, critical_energy: 3.6074 },
                ],
            },
        );

        // 钙 (Ca)
        m.insert(
            "Ca",
            ElementData {
                atomic_number: 20,
                atomic_weight: 40.078,
                density: 1.55,
                lines: &[
                    LineData { name: "Ka", energy: 3.6917, critical_energy: 4.0381 },
                    LineData { name: "Kb", energy: 4.0127, critical_energy: 4.0381 },
                    LineData { name: "La", energy: 0.3413, critical_energy: 0.3463 },
                    LineData { name: "Ll", energy: 0.3027, critical_energy: 0.3463 },
                    LineData { name: "Ln", energy: 0.3063, critical_energy: 0.3502 },
                ],
            },
        );

        // 钛 (Ti)
        m.insert(
            "Ti",
            ElementData {
                atomic_number: 22,
                atomic_weight: 47.867,
                density: 4.507,
                lines: &[
                    LineData { name: "Ka", energy: 4.5109, critical_energy: 4.966 },
                    LineData { name: "Kb", energy: 4.9318, critical_energy: 4.966 },
                    LineData { name: "La", energy: 0.4522, critical_energy: 0.4555 },
                    LineData { name: "Lb3", energy: 0.5293, critical_energy: 0.5606 },
                    LineData { name: "Ll", energy: 0.3953, critical_energy: 0.4555 },
                    LineData { name: "Ln", energy: 0.4012, critical_energy: 0.4615 },
                ],
            },
        );

        // 钒 (V)
        m.insert(
            "V",
            ElementData {
                atomic_number: 23,
                atomic_weight: 50.9415,
                density: 6.11,
                lines: &[
                    LineData { name: "Ka", energy: 4.9522, critical_energy: 5.4651 },
                    LineData { name: "Kb", energy: 5.4273, critical_energy: 5.4651 },
                    LineData { name: "La", energy: 0.5113, critical_energy: 0.5122 },
                    LineData { name: "Lb3", energy: 0.5904, critical_energy: 0.6284 },
                    LineData { name: "Ll", energy: 0.4465, critical_energy: 0.5122 },
                    LineData { name: "Ln", energy: 0.4535, critical_energy: 0.5198 },
                ],
            },
        );

        // 铬 (Cr)
        m.insert(
            "Cr",
            ElementData {
                atomic_number: 24,
                atomic_weight: 51.9961,
                density: 7.19,
                lines: &[
                    LineData { name: "Ka", energy: 5.4147, critical_energy: 5.9892 },
                    LineData { name: "Kb", energy: 5.9467, critical_energy: 5.9892 },
                    LineData { name: "La", energy: 0.5722, critical_energy: 0.5741 },
                    LineData { name: "Lb3", energy: 0.6521, critical_energy: 0.6961 },
                    LineData { name: "Ll", energy: 0.5004, critical_energy: 0.5741 },
                    LineData { name: "Ln", energy: 0.5096, critical_energy: 0.5838 },
                ],
            },
        );

        // 锰 (Mn)
        m.insert(
            "Mn",
            ElementData {
                atomic_number: 25,
                atomic_weight: 54.938045,
                density: 7.47,
                lines: &[
                    LineData { name: "Ka", energy: 5.8987, critical_energy: 6.539 },
                    LineData { name: "Kb", energy: 6.4904, critical_energy: 6.539 },
                    LineData { name: "La", energy: 0.6374, critical_energy: 0.6387 },
                    LineData { name: "Lb3", energy: 0.7204, critical_energy: 0.769 },
                    LineData { name: "Ll", energy: 0.5564, critical_energy: 0.6387 },
                    LineData { name: "Ln", energy: 0.5675, critical_energy: 0.6498 },
                ],
            },
        );

        // 铁 (Fe)
        m.insert(
            "Fe",
            ElementData {
                atomic_number: 26,
                atomic_weight: 55.845,
                density: 7.874,
                lines: &[
                    LineData { name: "Ka", energy: 6.4039, critical_energy: 7.112 },
                    LineData { name: "Kb", energy: 7.058, critical_energy: 7.112 },
                    LineData { name: "La", energy: 0.7048, critical_energy: 0.7079 },
                    LineData { name: "Lb3", energy: 0.7921, critical_energy: 0.8461 },
                    LineData { name: "Ll", energy: 0.6152, critical_energy: 0.7079 },
                    LineData { name: "Ln", energy: 0.6282, critical_energy: 0.7209 },
                ],
            },
        );

        // 钴 (Co)
        m.insert(
            "Co",
            ElementData {
                atomic_number: 27,
                atomic_weight: 58.933195,
                density: 8.9,
                lines: &[
                    LineData { name: "Ka", energy: 6.9303, critical_energy: 7.7089 },
                    LineData { name: "Kb", energy: 7.6494, critical_energy: 7.7089 },
                    LineData { name: "La", energy: 0.7762, critical_energy: 0.7786 },
                    LineData { name: "Lb3", energy: 0.8661, critical_energy: 0.9256 },
                    LineData { name: "Ll", energy: 0.6779, critical_energy: 0.7786 },
                    LineData { name: "Ln", energy: 0.6929, critical_energy: 0.7935 },
                ],
            },
        );

        // 镍 (Ni)
        m.insert(
            "Ni",
            ElementData {
                atomic_number: 28,
                atomic_weight: 58.6934,
                density: 8.908,
                lines: &[
                    LineData { name: "Ka", energy: 7.4781, critical_energy: 8.3328 },
                    LineData { name: "Kb", energy: 8.2647, critical_energy: 8.3328 },
                    LineData { name: "La", energy: 0.8515, critical_energy: 0.8547 },
                    LineData { name: "Lb1", energy: 0.8688, critical_energy: 0.8717 },
                    LineData { name: "Lb3", energy: 0.94, critical_energy: 1.0081 },
                    LineData { name: "Ll", energy: 0.7429, critical_energy: 0.8547 },
                    LineData { name: "Ln", energy: 0.7585, critical_energy: 0.8717 },
                ],
            },
        );

        // 铜 (Cu)
        m.insert(
            "Cu",
            ElementData {
                atomic_number: 29,
                atomic_weight: 63.546,
                density: 8.96,
                lines: &[
                    LineData { name: "Ka", energy: 8.0478, critical_energy: 8.9789 },
                    LineData { name: "Kb", energy: 8.9053, critical_energy: 8.9789 },
                    LineData { name: "La", energy: 0.9295, critical_energy: 0.9327 },
                    LineData { name: "Lb1", energy: 0.9494, critical_energy: 0.9523 },
                    LineData { name: "Lb3", energy: 1.0225, critical_energy: 1.0961 },
                    LineData { name: "Ll", energy: 0.8113, critical_energy: 0.9327 },
                    LineData { name: "Ln", energy: 0.8312, critical_energy: 0.9523 },
                ],
            },
        );

        // 锌 (Zn)
        m.insert(
            "Zn",
            ElementData {
                atomic_number: 30,
                atomic_weight: 65.38,
                density: 7.14,
                lines: &[
                    LineData { name: "Ka", energy: 8.6389, critical_energy: 9.6586 },
                    LineData { name: "Kb", energy: 9.572, critical_energy: 9.6586 },
                    LineData { name: "La", energy: 1.0116, critical_energy: 1.0196 },
                    LineData { name: "Lb1", energy: 1.0347, critical_energy: 1.0428 },
                    LineData { name: "Lb3", energy: 1.107, critical_energy: 1.1936 },
                    LineData { name: "Ll", energy: 0.8838, critical_energy: 1.0196 },
                    LineData { name: "Ln", energy: 0.9069, critical_energy: 1.0428 },
                ],
            },
        );

        // 镓 (Ga)
        m.insert(
            "Ga",
            ElementData {
                atomic_number: 31,
                atomic_weight: 69.723,
                density: 5.904,
                lines: &[
                    LineData { name: "Ka", energy: 9.2517, critical_energy: 10.3671 },
                    LineData { name: "Kb", energy: 10.2642, critical_energy: 10.3671 },
                    LineData { name: "La", energy: 1.098, critical_energy: 1.1154 },
                    LineData { name: "Lb1", energy: 1.1249, critical_energy: 1.1423 },
                    LineData { name: "Lb3", energy: 1.1948, critical_energy: 1.2977 },
                    LineData { name: "Ll", energy: 0.9573, critical_energy: 1.1154 },
                    LineData { name: "Ln", energy: 0.9842, critical_energy: 1.1423 },
                ],
            },
        );

        // 锗 (Ge)
        m.insert(
            "Ge",
            ElementData {
                atomic_number: 32,
                atomic_weight: 72.64,
                density: 5.323,
                lines: &[
                    LineData { name: "Ka", energy: 9.8864, critical_energy: 11.1031 },
                    LineData { name: "Kb", energy: 10.9823, critical_energy: 11.1031 },
                    LineData { name: "La", energy: 1.188, critical_energy: 1.2167 },
                    LineData { name: "Lb1", energy: 1.2185, critical_energy: 1.2478 },
                    LineData { name: "Lb3", energy: 1.2935, critical_energy: 1.4143 },
                    LineData { name: "Ll", energy: 1.0367, critical_energy: 1.2167 },
                    LineData { name: "Ln", energy: 1.0678, critical_energy: 1.2478 },
                ],
            },
        );

        // 锆 (Zr)
        m.insert(
            "Zr",
            ElementData {
                atomic_number: 40,
                atomic_weight: 91.224,
                density: 6.511,
                lines: &[
                    LineData { name: "Ka", energy: 15.7753, critical_energy: 17.998 },
                    LineData { name: "Kb", energy: 17.6678, critical_energy: 17.998 },
                    LineData { name: "La", energy: 2.0423, critical_energy: 2.2223 },
                    LineData { name: "Lb1", energy: 2.1244, critical_energy: 2.3067 },
                    LineData { name: "Lb2", energy: 2.2194, critical_energy: 2.2223 },
                    LineData { name: "Lg1", energy: 2.3027, critical_energy: 2.3067 },
                    LineData { name: "Ll", energy: 1.7924, critical_energy: 2.2223 },
                    LineData { name: "Ln", energy: 1.8764, critical_energy: 2.3067 },
                ],
            },
        );

        // 钼 (Mo)
        m.insert(
            "Mo",
            ElementData {
                atomic_number: 42,
                atomic_weight: 95.96,
                density: 10.28,
                lines: &[
                    LineData { name: "Ka", energy: 17.4793, critical_energy: 19.9995 },
                    LineData { name: "Kb", energy: 19.6072, critical_energy: 19.9995 },
                    LineData { name: "La", energy: 2.2932, critical_energy: 2.5202 },
                    LineData { name: "Lb1", energy: 2.3948, critical_energy: 2.6251 },
                    LineData { name: "Lb2", energy: 2.5184, critical_energy: 2.5202 },
                    LineData { name: "Lg1", energy: 2.6233, critical_energy: 2.6251 },
                    LineData { name: "Ll", energy: 2.0156, critical_energy: 2.5202 },
                    LineData { name: "Ln", energy: 2.1205, critical_energy: 2.6251 },
                ],
            },
        );

        // 银 (Ag)
        m.insert(
            "Ag",
            ElementData {
                atomic_number: 47,
                atomic_weight: 107.8682,
                density: 10.49,
                lines: &[
                    LineData { name: "Ka", energy: 22.1629, critical_energy: 25.514 },
                    LineData { name: "Kb", energy: 24.9426, critical_energy: 25.514 },
                    LineData { name: "La", energy: 2.9843, critical_energy: 3.3511 },
                    LineData { name: "Lb1", energy: 3.1509, critical_energy: 3.5237 },
                    LineData { name: "Lb2", energy: 3.3478, critical_energy: 3.3511 },
                    LineData { name: "Lg1", energy: 3.5196, critical_energy: 3.5237 },
                    LineData { name: "Ll", energy: 2.6336, critical_energy: 3.3511 },
                    LineData { name: "Ln", energy: 2.8058, critical_energy: 3.5237 },
                ],
            },
        );

        // 锡 (Sn)
        m.insert(
            "Sn",
            ElementData {
                atomic_number: 50,
                atomic_weight: 118.71,
                density: 7.31,
                lines: &[
                    LineData { name: "Ka", energy: 25.2713, critical_energy: 29.2001 },
                    LineData { name: "Kb", energy: 28.4857, critical_energy: 29.2001 },
                    LineData { name: "La", energy: 3.444, critical_energy: 3.9288 },
                    LineData { name: "Lb1", energy: 3.6628, critical_energy: 4.1561 },
                    LineData { name: "Lb2", energy: 3.9049, critical_energy: 3.9288 },
                    LineData { name: "Lg1", energy: 4.1311, critical_energy: 4.1561 },
                    LineData { name: "Ll", energy: 3.0449, critical_energy: 3.9288 },
                    LineData { name: "Ln", energy: 3.2723, critical_energy: 4.1561 },
                ],
            },
        );

        // 钨 (W)
        m.insert(
            "W",
            ElementData {
                atomic_number: 74,
                atomic_weight: 183.84,
                density: 19.25,
                lines: &[
                    LineData { name: "Ka", energy: 59.3182, critical_energy: 69.525 },
                    LineData { name: "Kb", energy: 67.2443, critical_energy: 69.525 },
                    LineData { name: "La", energy: 8.3976, critical_energy: 10.2068 },
                    LineData { name: "Lb1", energy: 9.6724, critical_energy: 11.544 },
                    LineData { name: "Lb2", energy: 9.9615, critical_energy: 10.2068 },
                    LineData { name: "Lg1", energy: 11.2859, critical_energy: 11.544 },
                    LineData { name: "Ll", energy: 7.3872, critical_energy: 10.2068 },
                    LineData { name: "Ln", energy: 8.7244, critical_energy: 11.544 },
                    LineData { name: "Ma", energy: 1.7756, critical_energy: 1.8092 },
                    LineData { name: "Mb", energy: 1.8351, critical_energy: 1.8716 },
                    LineData { name: "Mg", energy: 2.0356, critical_energy: 2.281 },
                    LineData { name: "Mz", energy: 1.3839, critical_energy: 1.8092 },
                ],
            },
        );

        // 铂 (Pt)
        m.insert(
            "Pt",
            ElementData {
                atomic_number: 78,
                atomic_weight: 195.084,
                density: 21.45,
                lines: &[
                    LineData { name: "Ka", energy: 66.8311, critical_energy: 78.3948 },
                    LineData { name: "Kb", energy: 75.7494, critical_energy: 78.3948 },
                    LineData { name: "La", energy: 9.4421, critical_energy: 11.5637 },
                    LineData { name: "Lb1", energy: 11.0707, critical_energy: 13.2726 },
                    LineData { name: "Lb2", energy: 11.2504, critical_energy: 11.5637 },
                    LineData { name: "Ll", energy: 8.2677, critical_energy: 11.5637 },
                    LineData { name: "Ln", energy: 9.9766, critical_energy: 13.2726 },
                    LineData { name: "Ma", energy: 2.0505, critical_energy: 2.1216 },
                    LineData { name: "Mb", energy: 2.1276, critical_energy: 2.2019 },
                    LineData { name: "Mg", energy: 2.3321, critical_energy: 2.6454 },
                    LineData { name: "Mz", energy: 1.6026, critical_energy: 2.1216 },
                ],
            },
        );

        // 金 (Au)
        m.insert(
            "Au",
            ElementData {
                atomic_number: 79,
                atomic_weight: 196.966569,
                density: 19.3,
                lines: &[
                    LineData { name: "Ka", energy: 68.8062, critical_energy: 80.7249 },
                    LineData { name: "Kb", energy: 77.9819, critical_energy: 80.7249 },
                    LineData { name: "La", energy: 9.7133, critical_energy: 11.9187 },
                    LineData { name: "Lb1", energy: 11.4423, critical_energy: 13.7336 },
                    LineData { name: "Lb2", energy: 11.5847, critical_energy: 11.9187 },
                    LineData { name: "Ll", energy: 8.4939, critical_energy: 11.9187 },
                    LineData { name: "Ln", energy: 10.3083, critical_energy: 13.7336 },
                    LineData { name: "Ma", energy: 2.1229, critical_energy: 2.2057 },
                    LineData { name: "Mb", energy: 2.2047, critical_energy: 2.2911 },
                    LineData { name: "Mg", energy: 2.4091, critical_energy: 2.743 },
                    LineData { name: "Mz", energy: 1.6603, critical_energy: 2.2057 },
                ],
            },
        );

        // 铅 (Pb)
        m.insert(
            "Pb",
            ElementData {
                atomic_number: 82,
                atomic_weight: 207.2,
                density: 11.34,
                lines: &[
                    LineData { name: "Ka", energy: 74.9694, critical_energy: 88.0045 },
                    LineData { name: "Kb", energy: 84.936, critical_energy: 88.0045 },
                    LineData { name: "La", energy: 10.5512, critical_energy: 13.0352 },
                    LineData { name: "Lb1", energy: 12.6137, critical_energy: 15.2 },
                    LineData { name: "Lb2", energy: 12.6226, critical_energy: 13.0352 },
                    LineData { name: "Ll", energy: 9.1845, critical_energy: 13.0352 },
                    LineData { name: "Ln", energy: 11.3493, critical_energy: 15.2 },
                    LineData { name: "Ma", energy: 2.3423, critical_energy: 2.484 },
                    LineData { name: "Mb", energy: 2.4427, critical_energy: 2.5856 },
                    LineData { name: "Mg", energy: 2.6535, critical_energy: 3.0664 },
                    LineData { name: "Mz", energy: 1.8395, critical_energy: 2.484 },
                ],
            },
        );
        m
    });
