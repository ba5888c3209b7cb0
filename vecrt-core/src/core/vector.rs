//! 三分量浮点向量 (Core 层)
//!
//! `Vec3` 直接内联存放在 `Value` 槽位中，没有堆分配，也没有引用计数。
//! 所有运算都返回新值。

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::number::format_number;

/// 三个 f32 分量组成的不可变向量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// 零向量
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 点积（f32 精度计算）
    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// 右手系叉积
    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// 单位化
    ///
    /// 零向量不做特殊处理：`1 / sqrt(0)` 为 inf，结果分量为 NaN，
    /// 与标量除零的浮点语义一致。
    #[inline]
    pub fn normalize(self) -> Vec3 {
        let s = 1.0 / self.dot(self).sqrt();
        self * s
    }

    /// 按单字符键取分量，大小写不敏感（x/y/z/X/Y/Z）
    pub fn component(self, key: &str) -> Option<f32> {
        match key.as_bytes() {
            [b'x' | b'X'] => Some(self.x),
            [b'y' | b'Y'] => Some(self.y),
            [b'z' | b'Z'] => Some(self.z),
            _ => None,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// 逐分量乘法
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// `x, y, z`，分量提升为 f64 后按宿主默认数字格式输出
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            format_number(self.x as f64),
            format_number(self.y as f64),
            format_number(self.z as f64)
        )
    }
}
