//! 宿主数字格式与数字强制转换
//!
//! 默认数字格式等价于 C 的 `%.14g`。

/// `%.14g` 的有效数字位数
const NUMBER_PRECISION: usize = 14;

/// 按宿主默认格式（`%.14g`）渲染数字
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // 先用科学计数法确定舍入后的十进制指数
    let sci = format!("{:.*e}", NUMBER_PRECISION - 1, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= NUMBER_PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (NUMBER_PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{n:.decimals$}")).to_string()
    }
}

/// 去掉小数部分末尾的 0 以及多余的小数点
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// 字符串到数字的强制转换
///
/// 接受首尾空白、十进制浮点和 `0x` 前缀的十六进制整数；空串返回 None。
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (negative, body) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        if hex.starts_with(|c: char| c == '+' || c == '-') {
            return None;
        }
        let n = u64::from_str_radix(hex, 16).ok()? as f64;
        return Some(if negative { -n } else { n });
    }

    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(1e13), "10000000000000");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(1.0 / 3.0), "0.33333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e14), "1e+14");
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1e100), "1e+100");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number("  -2.5  "), Some(-2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("-0XfF"), Some(-255.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("0x"), None);
    }

    #[test]
    fn test_parse_hex_rejects_inner_sign() {
        assert_eq!(parse_number("0x+5"), None);
        assert_eq!(parse_number("0x-5"), None);
        assert_eq!(parse_number("-0x+5"), None);
        assert_eq!(parse_number("+0x5"), Some(5.0));
    }
}
