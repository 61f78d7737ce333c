//! Static lookup tables for video track labels.
//!
//! Resolution standards are keyed by the exact `"WIDTHxHEIGHT"` string of a
//! stream's display dimensions. Pixel formats map ffprobe `pix_fmt` tokens to
//! their canonical upper-case names.
//!
//! The color tables are keyed by the numeric codes used in Matroska
//! `Colour` elements. ffprobe reports color fields as names (`bt709`,
//! `tv`, ...), so these tables are not applied to [`VideoTrack`] color fields;
//! they are available to callers that hold numeric codes.
//!
//! [`VideoTrack`]: crate::identify::VideoTrack

/// Returns the human label for an exact display dimension string.
#[must_use]
pub fn resolution_standard(dimensions: &str) -> Option<&'static str> {
    let label = match dimensions {
        // SDTV & EDTV
        "320x240" => "QVGA",
        "352x240" => "SIF",
        "352x288" => "CIF",
        "352x480" => "480i",
        "480x320" => "HVGA",
        "640x480" => "480p",
        "720x480" => "SD_NTSC",
        "720x576" => "576i",
        "768x576" => "SD_PAL+",
        "854x480" => "FWVGA",
        "960x540" => "qHD",
        "1024x576" => "576p",
        "1024x768" => "XGA",

        // HDTV
        "960x720" => "720p",
        "1152x648" => "720p",
        "1280x720" => "720p",
        "1280x800" => "800p",
        "1280x960" => "960p",
        "1280x1080" => "1080p",
        "1366x768" => "768p",
        "1440x900" => "WXGA+",
        "1440x1080" => "1080p",
        "1440x1440" => "Square_HD",
        "1600x900" => "900p",
        "1600x1200" => "UXGA",
        "1620x1080" => "1080_WIDE",
        "1680x1050" => "WSXGA+",
        "1920x1080" => "1080p",
        "1920x1200" => "1200p",
        "2400x1600" => "Full_HD+",
        "2560x1080" => "UWFHD",
        "3840x1080" => "DFHD",

        // Digital cinema
        "1920x1440" => "QHD",
        "1998x1080" => "2K_Flat",
        "2048x858" => "2K_Scope",
        "2048x1080" => "2K_DCI",
        "2048x1536" => "2K_DCI",
        "2560x1440" => "1440p",
        "2560x1600" => "WQXGA",
        "2560x2048" => "QSXGA",
        "2732x1536" => "iPad_Pro",
        "3200x1440" => "WQHD+",
        "3200x1800" => "QHD+",
        "3440x1440" => "2K_UWQHD",
        "3840x1600" => "UWQHD+",
        "3840x2400" => "4K WQUXGA",
        "3996x2160" => "4K_Flat",
        "4096x1716" => "4K_Scope",
        "4096x2160" => "4K_DCI",
        "5120x1440" => "DQHD",
        "5120x2880" => "5K",
        "5120x3200" => "5K",
        "6016x3384" => "6K",
        "7680x3200" => "8K UWD",

        // UHDTV (Rec. 2020)
        "3840x2160" => "2160p",
        "7680x4320" => "4320p",

        // Film scans
        "1828x1332" => "2K_Academy",
        "2880x2160" => "3K",
        "3072x2160" => "3K",
        "3656x2664" => "4K_Academy",
        "4096x2304" => "4K UHD+",
        "4096x3072" => "4K Full",
        "5120x2160" => "5K",
        "6144x3160" => "6K_IMAX",
        "6144x3456" => "6K Full",
        "8192x3428" => "8K_Ultra",
        "8192x4320" => "8K_Full",
        "8192x5460" => "8K Full",
        "10240x4320" => "10K",
        "11520x6480" => "11K_IMAX",

        _ => return None,
    };
    Some(label)
}

/// Canonical ffprobe pixel format tokens.
const PIXEL_FORMATS: &[&str] = &[
    // YUV
    "yuv420p", "yuv422p", "yuv444p", "yuv410p", "yuv411p", "yuvj420p", "yuvj422p",
    "yuvj444p", "yuv440p", "yuvj440p", "yuva420p", "yuva422p", "yuva444p",
    // YUV 16-bit
    "yuv420p16le", "yuv420p16be", "yuv422p16le", "yuv422p16be", "yuv444p16le",
    "yuv444p16be",
    // YUV 9/10/12/14-bit
    "yuv420p9be", "yuv420p9le", "yuv420p10be", "yuv420p10le", "yuv422p10be",
    "yuv422p10le", "yuv444p9be", "yuv444p9le", "yuv444p10be", "yuv444p10le",
    "yuv422p9be", "yuv422p9le", "yuv420p12be", "yuv420p12le", "yuv420p14be",
    "yuv420p14le", "yuv422p12be", "yuv422p12le", "yuv422p14be", "yuv422p14le",
    "yuv444p12be", "yuv444p12le", "yuv444p14be", "yuv444p14le",
    // RGB
    "rgb24", "bgr24", "rgb48be", "rgb48le", "rgb565be", "rgb565le", "rgb555be",
    "rgb555le", "rgb444le", "rgb444be", "rgb8", "rgb4", "rgb4_byte",
    // BGR
    "bgr8", "bgr4", "bgr4_byte", "bgr48be", "bgr48le", "bgr565be", "bgr565le",
    "bgr555be", "bgr555le", "bgr444le", "bgr444be",
    // Packed YUV
    "yuyv422", "uyvy422", "uyyvyy411",
    // Planar RGB
    "gbrp", "gbrp9be", "gbrp9le", "gbrp10be", "gbrp10le", "gbrp16be", "gbrp16le",
    "gbrp12be", "gbrp12le", "gbrp14be", "gbrp14le",
    // Alpha
    "argb", "rgba", "abgr", "bgra", "rgba64be", "rgba64le", "bgra64be", "bgra64le",
    // Grayscale
    "gray", "gray16be", "gray16le", "gray8a",
    // Palette and bitstream
    "pal8", "monow", "monob",
    // Semi-planar
    "nv12", "nv21",
    // Padded RGB
    "0rgb", "rgb0", "0bgr", "bgr0",
];

/// Resolves a `pix_fmt` token to its display label.
///
/// Known tokens map to their canonical name; anything else is returned
/// upper-cased as-is.
#[must_use]
pub fn pixel_format_label(pix_fmt: &str) -> String {
    match PIXEL_FORMATS.iter().find(|known| **known == pix_fmt) {
        Some(known) => known.to_ascii_uppercase(),
        None => pix_fmt.to_uppercase(),
    }
}

/// Matroska `MatrixCoefficients` code to label.
#[must_use]
pub fn color_matrix_label(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "Identity/GBR",
        1 => "BT.709",
        2 => "Unspecified",
        3 => "Reserved",
        4 => "BT.470M",
        5 => "BT.470BG",
        6 => "SMPTE 170M",
        7 => "SMPTE 240M",
        8 => "YCgCo",
        9 => "YCgCo-601",
        10 => "BT.2020",
        _ => return None,
    })
}

/// Matroska `Primaries` code to label.
#[must_use]
pub fn color_primaries_label(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "Reserved",
        1 => "ITU-R BT.709",
        2 => "Unspecified",
        3 => "Reserved",
        4 => "ITU-R BT.470M",
        5 => "ITU-R BT.470BG",
        6 => "SMPTE 170M",
        7 => "SMPTE 240M",
        8 => "FILM",
        9 => "ITU-R BT.2020",
        10 => "SMPTE ST 428-1",
        22 => "JEDEC P22 phosphors",
        _ => return None,
    })
}

/// Matroska `Range` code to label.
#[must_use]
pub fn color_range_label(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "unspecified",
        1 => "broadcast range",
        2 => "full range (no clipping)",
        3 => "defined by MatrixCoefficients/TransferCharacteristics",
        _ => return None,
    })
}

/// Matroska `TransferCharacteristics` code to label.
#[must_use]
pub fn color_transfer_label(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "reserved",
        1 => "ITU-R BT.709",
        2 => "unspecified",
        3 => "reserved",
        4 => "gamma 2.2 curve",
        5 => "gamma 2.8 curve",
        6 => "SMPTE 170M",
        7 => "SMPTE 240M",
        8 => "linear",
        9 => "log",
        10 => "log sqrt",
        11 => "IEC 61966-2-4",
        12 => "ITU-R BT.1361 extended color gamut",
        13 => "IEC 61966-2-1",
        14 => "ITU-R BT.2020 10 bit",
        15 => "ITU-R BT.2020 12 bit",
        16 => "SMPTE ST 2084",
        17 => "SMPTE ST 428-1",
        18 => "ARIB STD-B67 (HLG)",
        _ => return None,
    })
}
