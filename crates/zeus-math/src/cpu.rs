// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host CPU capability detection.
//!
//! The capability record is detected once per process and cached in a
//! [`OnceLock`]; every later read is lock-free. Only lane-backend selection
//! diagnostics consult it, the arithmetic kernel never does.
#![allow(unsafe_code)]

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::lanes::ACTIVE_BACKEND;

static CPU_INFO: OnceLock<CpuInfo> = OnceLock::new();

/// Vendor/brand strings and SIMD capability flags of the host processor.
///
/// On non-x86 targets every flag is `false` and both strings are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// CPUID vendor string (e.g. `GenuineIntel`, `AuthenticAMD`).
    pub vendor: String,
    /// CPUID processor brand string, trimmed of padding.
    pub brand: String,
    /// `true` when the vendor string is `GenuineIntel`.
    pub is_intel: bool,
    /// SSE (1) support.
    pub sse1: bool,
    /// SSE2 support.
    pub sse2: bool,
    /// SSE3 support.
    pub sse3: bool,
    /// Supplemental SSE3 support.
    pub ssse3: bool,
    /// SSE4.1 support.
    pub sse41: bool,
    /// SSE4.2 support.
    pub sse42: bool,
    /// AMD SSE4a support.
    pub sse4a: bool,
    /// AES-NI support.
    pub aes_ni: bool,
}

impl CpuInfo {
    /// Returns `true` when either SSE4.1 or SSE4.2 is available.
    pub fn has_sse4(&self) -> bool {
        self.sse41 || self.sse42
    }
}

/// Queries the host CPU on first call and returns the cached record.
///
/// Call early during startup to front-load detection and its log line;
/// subsequent calls (from any thread) return the same reference without
/// querying again.
pub fn detect_cpu() -> &'static CpuInfo {
    CPU_INFO.get_or_init(|| {
        let info = query_host();
        debug!(
            vendor = %info.vendor,
            brand = %info.brand,
            sse1 = info.sse1,
            sse2 = info.sse2,
            sse3 = info.sse3,
            ssse3 = info.ssse3,
            sse41 = info.sse41,
            sse42 = info.sse42,
            sse4a = info.sse4a,
            aes_ni = info.aes_ni,
            backend = ACTIVE_BACKEND.name(),
            "detected host CPU"
        );
        if !ACTIVE_BACKEND.is_supported_by(&info) {
            warn!(
                backend = ACTIVE_BACKEND.name(),
                "compiled lane backend requires CPU features the host does not report"
            );
        }
        info
    })
}

/// Returns the process-wide CPU capability record, detecting it on first use.
#[inline]
pub fn cpu_features() -> &'static CpuInfo {
    detect_cpu()
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[allow(unused_unsafe)]
fn query_host() -> CpuInfo {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::__cpuid;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::__cpuid;

    // SAFETY: CPUID exists on every processor Rust's x86/x86_64 targets run
    // on; leaves above the reported maximum are never queried.
    let leaf0 = unsafe { __cpuid(0) };
    let mut vendor_bytes = Vec::with_capacity(12);
    for reg in [leaf0.ebx, leaf0.edx, leaf0.ecx] {
        vendor_bytes.extend_from_slice(&reg.to_le_bytes());
    }
    let vendor = bytes_to_trimmed_string(&vendor_bytes);

    // SAFETY: see above; leaf 0x8000_0000 reports the highest extended leaf.
    let max_extended = unsafe { __cpuid(0x8000_0000) }.eax;
    let brand = if max_extended >= 0x8000_0004 {
        let mut brand_bytes = Vec::with_capacity(48);
        for leaf in 0x8000_0002_u32..=0x8000_0004 {
            // SAFETY: `leaf` is within the range reported by leaf 0x8000_0000.
            let regs = unsafe { __cpuid(leaf) };
            for reg in [regs.eax, regs.ebx, regs.ecx, regs.edx] {
                brand_bytes.extend_from_slice(&reg.to_le_bytes());
            }
        }
        bytes_to_trimmed_string(&brand_bytes)
    } else {
        String::new()
    };

    CpuInfo {
        is_intel: vendor == "GenuineIntel",
        vendor,
        brand,
        sse1: std::arch::is_x86_feature_detected!("sse"),
        sse2: std::arch::is_x86_feature_detected!("sse2"),
        sse3: std::arch::is_x86_feature_detected!("sse3"),
        ssse3: std::arch::is_x86_feature_detected!("ssse3"),
        sse41: std::arch::is_x86_feature_detected!("sse4.1"),
        sse42: std::arch::is_x86_feature_detected!("sse4.2"),
        sse4a: std::arch::is_x86_feature_detected!("sse4a"),
        aes_ni: std::arch::is_x86_feature_detected!("aes"),
    }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn query_host() -> CpuInfo {
    CpuInfo::default()
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn bytes_to_trimmed_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(char::from(0))
        .trim()
        .to_owned()
}
