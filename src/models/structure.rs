//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示，由数据集条目解码得到，再序列化为 CIF。
//!
//! ## 依赖关系
//! - 被 `converters/` 使用
//! - 使用 `models/composition.rs` 计算组分

use serde::{Deserialize, Serialize};

use super::composition::Composition;

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let cos_alpha = alpha.to_radians().cos();
        let cos_beta = beta.to_radians().cos();
        let cos_gamma = gamma.to_radians().cos();
        let sin_gamma = gamma.to_radians().sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        Lattice {
            matrix: [a_vec, b_vec, [c1, c2, c3]],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = norm(a_vec);
        let b = norm(b_vec);
        let c = norm(c_vec);

        let alpha = (dot(b_vec, c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(a_vec, c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(a_vec, b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积（带符号的行列式）
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 晶格矩阵的逆矩阵；奇异晶格返回 `None`
    pub fn inverse(&self) -> Option<[[f64; 3]; 3]> {
        let m = self.matrix;
        let det = self.volume();
        if det.abs() < 1e-10 {
            return None;
        }

        Some([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ])
    }

    /// 分数坐标转笛卡尔坐标 (r = f · M)
    pub fn frac_to_cart(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = self.matrix;
        let mut cart = [0.0; 3];
        for (j, c) in cart.iter_mut().enumerate() {
            *c = frac[0] * m[0][j] + frac[1] * m[1][j] + frac[2] * m[2][j];
        }
        cart
    }

    /// 笛卡尔坐标转分数坐标 (f = r · M⁻¹)；奇异晶格返回 `None`
    pub fn cart_to_frac(&self, cart: [f64; 3]) -> Option<[f64; 3]> {
        let inv = self.inverse()?;
        let mut frac = [0.0; 3];
        for (j, f) in frac.iter_mut().enumerate() {
            *f = cart[0] * inv[0][j] + cart[1] * inv[1][j] + cart[2] * inv[2][j];
        }
        Some(frac)
    }

    /// 周期边界条件下两个分数坐标之间的最短距离 (Å)
    pub fn periodic_distance(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        let mut best = f64::INFINITY;
        let base = [
            a[0] - b[0] - (a[0] - b[0]).round(),
            a[1] - b[1] - (a[1] - b[1]).round(),
            a[2] - b[2] - (a[2] - b[2]).round(),
        ];

        // 倾斜晶胞中最近像不一定是取整后的像，检查相邻 27 个像
        for i in -1..=1 {
            for j in -1..=1 {
                for k in -1..=1 {
                    let d = [
                        base[0] + i as f64,
                        base[1] + j as f64,
                        base[2] + k as f64,
                    ];
                    best = best.min(norm(self.frac_to_cart(d)));
                }
            }
        }
        best
    }
}

fn dot(x: [f64; 3], y: [f64; 3]) -> f64 {
    x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
}

fn norm(x: [f64; 3]) -> f64 {
    dot(x, x).sqrt()
}

/// 原子信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crystal {
    /// 晶格
    pub lattice: Lattice,

    /// 原子列表
    pub atoms: Vec<Atom>,
}

impl Crystal {
    pub fn new(lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal { lattice, atoms }
    }

    /// 结构组分
    pub fn composition(&self) -> Composition {
        Composition::from_symbols(self.atoms.iter().map(|a| a.element.as_str()))
    }
}
