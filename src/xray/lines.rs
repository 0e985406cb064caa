//! # 特征谱线解析
//!
//! 给定元素与电镜能量上限，推导可观测的特征 X 射线谱线。
//!
//! ## 规则
//! 1. 候选谱线按线系排序: K > L > M，同一线系内按名称字母序
//! 2. 只有能量严格低于能量上限（束流能量与谱仪量程的较小者）的谱线可观测
//! 3. `only_lines` 时仅保留主线 (Ka, La, Ma)
//! 4. `only_one` 时每个元素只保留一条: 取第一条过压比 ≥ 2
//!    （能量低于束流能量一半）的谱线，否则取最后一条候选
//!
//! ## 依赖关系
//! - 被 `signal/spectrum.rs`, `signal/intensity.rs`, `commands/lines.rs` 调用
//! - 使用 `xray/database.rs` 查询谱线能量
//! - 使用 `regex` 校验谱线标识

use crate::error::{EdsError, Result};
use crate::xray::database::XrayDatabase;

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 主线列表
pub const PRINCIPAL_LINES: [&str; 3] = ["Ka", "La", "Ma"];

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]?)_([KLM][a-z]*[0-9]*)$").unwrap());

/// 谱线线系
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LineFamily {
    K,
    L,
    M,
}

impl LineFamily {
    /// 由谱线名称首字母确定线系
    pub fn of(line: &str) -> Option<Self> {
        match line.chars().next() {
            Some('K') => Some(LineFamily::K),
            Some('L') => Some(LineFamily::L),
            Some('M') => Some(LineFamily::M),
            _ => None,
        }
    }
}

/// 谱线标识 `"<Element>_<Line>"`，如 `Fe_Ka`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId {
    element: String,
    line: String,
}

impl LineId {
    pub fn new(element: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            line: line.into(),
        }
    }

    /// 解析 `"Fe_Ka"` 形式的字符串（只校验格式，不查询数据库）
    pub fn parse(s: &str) -> Result<Self> {
        let caps = LINE_PATTERN
            .captures(s.trim())
            .ok_or_else(|| EdsError::InvalidLineFormat(s.to_string()))?;
        Ok(Self::new(&caps[1], &caps[2]))
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn family(&self) -> Option<LineFamily> {
        LineFamily::of(&self.line)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.element, self.line)
    }
}

/// 谱线选择策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePolicy {
    /// 每个元素最多一条谱线
    pub only_one: bool,
    /// 只考虑主线 (Ka, La, Ma)
    pub only_lines: bool,
}

impl Default for LinePolicy {
    fn default() -> Self {
        Self {
            only_one: false,
            only_lines: true,
        }
    }
}

impl LinePolicy {
    pub fn new(only_one: bool, only_lines: bool) -> Self {
        Self {
            only_one,
            only_lines,
        }
    }

    /// 不做任何限制（所有可观测谱线）
    pub fn all() -> Self {
        Self::new(false, false)
    }
}

/// 谱线解析器
pub struct LineResolver<'a, D: XrayDatabase + ?Sized> {
    db: &'a D,
    /// 束流能量（keV）
    beam_energy: f64,
    /// 可观测能量上限（keV）
    energy_limit: f64,
}

impl<'a, D: XrayDatabase + ?Sized> LineResolver<'a, D> {
    /// 创建解析器，能量上限为束流能量
    pub fn new(db: &'a D, beam_energy: f64) -> Self {
        Self {
            db,
            beam_energy,
            energy_limit: beam_energy,
        }
    }

    /// 以谱仪量程上限进一步收紧能量上限
    pub fn with_max_energy(mut self, max_energy: f64) -> Self {
        self.energy_limit = self.energy_limit.min(max_energy);
        self
    }

    pub fn energy_limit(&self) -> f64 {
        self.energy_limit
    }

    /// 解析单个元素的谱线
    ///
    /// 返回的谱线按 K > L > M 优先级排列；没有可观测谱线时返回空列表。
    pub fn resolve(&self, element: &str, policy: LinePolicy) -> Result<Vec<LineId>> {
        self.db.check_element(element)?;

        let mut names = self.db.line_names(element)?;
        names.sort_by(|a, b| {
            LineFamily::of(a)
                .cmp(&LineFamily::of(b))
                .then_with(|| a.cmp(b))
        });

        let mut candidates: Vec<(LineId, f64)> = Vec::new();
        for name in names {
            if policy.only_lines && !PRINCIPAL_LINES.contains(&name.as_str()) {
                continue;
            }
            let id = LineId::new(element, name);
            let energy = self.db.line_energy(&id)?.energy;
            if energy < self.energy_limit {
                candidates.push((id, energy));
            }
        }

        if policy.only_one && !candidates.is_empty() {
            let half_beam = self.beam_energy / 2.0;
            let index = candidates
                .iter()
                .position(|(_, energy)| *energy < half_beam)
                .unwrap_or(candidates.len() - 1);
            return Ok(vec![candidates.swap_remove(index).0]);
        }

        Ok(candidates.into_iter().map(|(id, _)| id).collect())
    }

    /// 依次解析多个元素，结果按元素顺序拼接
    pub fn resolve_all<'e, I>(&self, elements: I, policy: LinePolicy) -> Result<Vec<LineId>>
    where
        I: IntoIterator<Item = &'e str>,
    {
        let mut lines = Vec::new();
        for element in elements {
            lines.extend(self.resolve(element, policy)?);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xray::database::{BuiltinDatabase, LineEnergy};

    fn names(lines: &[LineId]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_line_id() {
        let id = LineId::parse("Fe_Lb3").unwrap();
        assert_eq!(id.element(), "Fe");
        assert_eq!(id.line(), "Lb3");
        assert_eq!(id.family(), Some(LineFamily::L));
        assert_eq!(id.to_string(), "Fe_Lb3");

        assert!(matches!(
            LineId::parse("Fe-Ka"),
            Err(EdsError::InvalidLineFormat(_))
        ));
        assert!(LineId::parse("fe_Ka").is_err());
        assert!(LineId::parse("Fe_Xa").is_err());
    }

    #[test]
    fn test_principal_line_in_spectral_range() {
        let db = BuiltinDatabase;
        let resolver = LineResolver::new(&db, 15.0).with_max_energy(1.023);
        let lines = resolver.resolve("Ti", LinePolicy::default()).unwrap();
        assert_eq!(names(&lines), vec!["Ti_La"]);
    }

    #[test]
    fn test_all_lines_below_limit() {
        let db = BuiltinDatabase;
        let resolver = LineResolver::new(&db, 15.0).with_max_energy(1.023);
        let lines = resolver
            .resolve_all(["Fe", "Ti"], LinePolicy::all())
            .unwrap();
        assert_eq!(
            names(&lines),
            vec!["Fe_La", "Fe_Lb3", "Fe_Ll", "Fe_Ln", "Ti_La", "Ti_Lb3", "Ti_Ll", "Ti_Ln"]
        );

        let low = LineResolver::new(&db, 0.4);
        let lines = low.resolve_all(["Fe", "Ti"], LinePolicy::all()).unwrap();
        assert_eq!(names(&lines), vec!["Ti_Ll"]);
    }

    #[test]
    fn test_only_one_prefers_overvoltage() {
        let db = BuiltinDatabase;
        // Zn Ka (8.64 keV) 高于 5 kV 束流，退到 La
        let one = LinePolicy::new(true, true);
        let resolver = LineResolver::new(&db, 5.0);
        let lines = resolver.resolve("Zn", one).unwrap();
        assert_eq!(names(&lines), vec!["Zn_La"]);

        // 15 kV 下 Zn Ka 过压比不足 2，选 La
        let resolver = LineResolver::new(&db, 15.0);
        assert_eq!(
            names(&resolver.resolve("Zn", LinePolicy::default()).unwrap()),
            vec!["Zn_Ka", "Zn_La"]
        );
        let lines = resolver.resolve("Zn", one).unwrap();
        assert_eq!(names(&lines), vec!["Zn_La"]);

        let resolver = LineResolver::new(&db, 30.0);
        let lines = resolver.resolve("Zn", one).unwrap();
        assert_eq!(names(&lines), vec!["Zn_Ka"]);

        // 只有一条候选且过压比不足时取最后一条
        let resolver = LineResolver::new(&db, 2.0);
        let lines = resolver.resolve("Al", one).unwrap();
        assert_eq!(names(&lines), vec!["Al_Ka"]);
    }

    #[test]
    fn test_no_observable_line() {
        let db = BuiltinDatabase;
        let resolver = LineResolver::new(&db, 0.5);
        assert!(resolver
            .resolve("Cu", LinePolicy::default())
            .unwrap()
            .is_empty());
        assert!(matches!(
            resolver.resolve("Qq", LinePolicy::default()),
            Err(EdsError::UnknownElement(_))
        ));
    }

    struct TwoLineDb;

    impl XrayDatabase for TwoLineDb {
        fn contains_element(&self, symbol: &str) -> bool {
            symbol == "X"
        }
        fn atomic_number(&self, _: &str) -> Result<u32> {
            Ok(1)
        }
        fn atomic_weight(&self, _: &str) -> Result<f64> {
            Ok(1.0)
        }
        fn density(&self, _: &str) -> Result<f64> {
            Ok(1.0)
        }
        fn line_names(&self, _: &str) -> Result<Vec<String>> {
            Ok(vec!["Ma".to_string(), "Lb".to_string(), "La".to_string()])
        }
        fn line_energy(&self, line: &LineId) -> Result<LineEnergy> {
            let energy = match line.line() {
                "La" => 3.0,
                "Lb" => 3.2,
                _ => 1.0,
            };
            Ok(LineEnergy {
                energy,
                critical_energy: energy + 0.1,
            })
        }
    }

    #[test]
    fn test_family_order_with_custom_database() {
        let db = TwoLineDb;
        let resolver = LineResolver::new(&db, 10.0);
        let lines = resolver.resolve("X", LinePolicy::all()).unwrap();
        assert_eq!(names(&lines), vec!["X_La", "X_Lb", "X_Ma"]);

        let lines = resolver
            .resolve("X", LinePolicy::new(true, false))
            .unwrap();
        assert_eq!(names(&lines), vec!["X_La"]);
    }
}
