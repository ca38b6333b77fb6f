//! Built-in Radix-style palette
//!
//! Every color has light and dark solid scales plus a shared alpha scale.
//! Values are the published Radix Colors steps.

use rustc_hash::FxHashMap;
use tinct_core::Color;

use crate::tokens::{ColorName, ColorScale, Scale};

macro_rules! solid {
    ($($hex:expr),* $(,)?) => {
        Scale::new([$(Color::from_hex($hex)),*])
    };
}

macro_rules! alpha {
    ($($hex:expr),* $(,)?) => {
        Scale::new([$(Color::from_hex_rgba($hex)),*])
    };
}

/// Black overlay scale
pub const BLACK_ALPHA: Scale = alpha![
    0x0000000d, 0x0000001a, 0x00000026, 0x00000033,
    0x0000004d, 0x00000066, 0x00000080, 0x00000099,
    0x000000b3, 0x000000cc, 0x000000e6, 0x000000f2,
];

/// White overlay scale
pub const WHITE_ALPHA: Scale = alpha![
    0xffffff0d, 0xffffff1a, 0xffffff26, 0xffffff33,
    0xffffff4d, 0xffffff66, 0xffffff80, 0xffffff99,
    0xffffffb3, 0xffffffcc, 0xffffffe6, 0xfffffff2,
];

/// Page colors that do not come from the gray scale. Dark background and
/// panel are gray steps 1 and 2 of the active theme.
pub mod surface {
    use tinct_core::Color;

    pub const LIGHT_BACKGROUND: Color = Color::WHITE;
    pub const LIGHT_SURFACE: Color = Color::from_hex_rgba(0xffffffd9);
    pub const LIGHT_PANEL: Color = Color::WHITE;

    pub const DARK_SURFACE: Color = Color::from_hex_rgba(0x00000040);
}

/// Scales for one built-in color
pub const fn color_scale(name: ColorName) -> ColorScale {
    match name {
        ColorName::Gray => GRAY,
        ColorName::Tomato => TOMATO,
        ColorName::Red => RED,
        ColorName::Ruby => RUBY,
        ColorName::Crimson => CRIMSON,
        ColorName::Pink => PINK,
        ColorName::Plum => PLUM,
        ColorName::Purple => PURPLE,
        ColorName::Violet => VIOLET,
        ColorName::Iris => IRIS,
        ColorName::Indigo => INDIGO,
        ColorName::Blue => BLUE,
        ColorName::Cyan => CYAN,
        ColorName::Teal => TEAL,
        ColorName::Jade => JADE,
        ColorName::Green => GREEN,
        ColorName::Grass => GRASS,
        ColorName::Bronze => BRONZE,
        ColorName::Gold => GOLD,
        ColorName::Brown => BROWN,
        ColorName::Orange => ORANGE,
        ColorName::Amber => AMBER,
        ColorName::Yellow => YELLOW,
        ColorName::Lime => LIME,
        ColorName::Mint => MINT,
        ColorName::Sky => SKY,
    }
}

/// The full built-in palette, keyed by name
pub fn palette() -> FxHashMap<ColorName, ColorScale> {
    ColorName::ALL
        .into_iter()
        .map(|name| (name, color_scale(name)))
        .collect()
}

pub const GRAY: ColorScale = ColorScale::new(
    solid![
        0xfcfcfc, 0xf9f9f9, 0xf0f0f0, 0xe8e8e8,
        0xe0e0e0, 0xd9d9d9, 0xcecece, 0xbbbbbb,
        0x8d8d8d, 0x838383, 0x646464, 0x202020,
    ],
    solid![
        0x111111, 0x191919, 0x222222, 0x2a2a2a,
        0x313131, 0x3a3a3a, 0x484848, 0x606060,
        0x6e6e6e, 0x7b7b7b, 0xb4b4b4, 0xeeeeee,
    ],
    alpha![
        0x00000003, 0x00000006, 0x0000000f, 0x00000017,
        0x0000001f, 0x00000026, 0x00000031, 0x00000044,
        0x00000072, 0x0000007c, 0x0000009b, 0x000000df,
    ],
    Some(Color::WHITE),
);

pub const TOMATO: ColorScale = ColorScale::new(
    solid![
        0xfffcfc, 0xfff8f7, 0xfeebe7, 0xffdcd3,
        0xffcdc2, 0xfdbdaf, 0xf5a898, 0xec8e7b,
        0xe54d2e, 0xdd4425, 0xd13415, 0x5c271f,
    ],
    solid![
        0x181111, 0x1f1513, 0x391714, 0x4e1511,
        0x5e1c16, 0x6e2920, 0x853a2d, 0xac4d39,
        0xe54d2e, 0xec6142, 0xff977d, 0xfbd3cb,
    ],
    alpha![
        0xff000003, 0xff200008, 0xf52b0018, 0xff35002c,
        0xff2e003d, 0xf92d0050, 0xe7280067, 0xdb250084,
        0xdf2600d1, 0xd72400da, 0xcd2200ea, 0x460900e0,
    ],
    Some(Color::WHITE),
);

pub const RED: ColorScale = ColorScale::new(
    solid![
        0xfffcfc, 0xfff7f7, 0xfeebec, 0xffdbdc,
        0xffcdce, 0xfdbdbe, 0xf4a9aa, 0xeb8e90,
        0xe5484d, 0xdc3e42, 0xce2c31, 0x641723,
    ],
    solid![
        0x191111, 0x201314, 0x3b1219, 0x500f1c,
        0x611623, 0x72232d, 0x8c333a, 0xb54548,
        0xe5484d, 0xec5d5e, 0xff9592, 0xffd1d9,
    ],
    alpha![
        0xff000003, 0xff000008, 0xf3000d14, 0xff000824,
        0xff000632, 0xf8000442, 0xdf000356, 0xd2000571,
        0xdb0007b7, 0xd10005c1, 0xc40006d3, 0x55000de8,
    ],
    Some(Color::WHITE),
);

pub const RUBY: ColorScale = ColorScale::new(
    solid![
        0xfffcfd, 0xfff7f8, 0xfeeaed, 0xffdce1,
        0xffced6, 0xf8bfc8, 0xefacb8, 0xe592a3,
        0xe54666, 0xdc3b5d, 0xca244d, 0x64172b,
    ],
    solid![
        0x191113, 0x1e1517, 0x3a141e, 0x4e1325,
        0x5e1a2e, 0x6f2539, 0x883447, 0xb3445a,
        0xe54666, 0xec5a72, 0xff949d, 0xfed2e1,
    ],
    alpha![
        0xff005503, 0xff002008, 0xf3002515, 0xff002523,
        0xff002a31, 0xe4002b40, 0xce002553, 0xc300286d,
        0xdb002cb9, 0xd2002cc4, 0xc10030db, 0x550016e8,
    ],
    Some(Color::WHITE),
);

pub const CRIMSON: ColorScale = ColorScale::new(
    solid![
        0xfffcfd, 0xfef7f9, 0xffe9f0, 0xfedce7,
        0xfacedd, 0xf3bed1, 0xeaacc3, 0xe093b2,
        0xe93d82, 0xdf3478, 0xcb1d63, 0x621639,
    ],
    solid![
        0x191114, 0x201318, 0x381525, 0x4d122f,
        0x5c1839, 0x6d2545, 0x873356, 0xb0436e,
        0xe93d82, 0xee518a, 0xff92ad, 0xfdd3e8,
    ],
    alpha![
        0xff005503, 0xe0004008, 0xff005216, 0xf8005123,
        0xe5004f31, 0xd0004b41, 0xbf004753, 0xb6004a6c,
        0xe2005bc2, 0xd70056cb, 0xc4004fe2, 0x530026e9,
    ],
    Some(Color::WHITE),
);

pub const PINK: ColorScale = ColorScale::new(
    solid![
        0xfffcfe, 0xfef7fb, 0xfee9f5, 0xfbdcef,
        0xf6cee7, 0xefbfdd, 0xe7acd0, 0xdd93c2,
        0xd6409f, 0xcf3897, 0xc2298a, 0x651249,
    ],
    solid![
        0x191117, 0x21121d, 0x37172f, 0x4b143d,
        0x591c47, 0x692955, 0x833869, 0xa84885,
        0xd6409f, 0xde51a8, 0xff8dcc, 0xfdd1ea,
    ],
    alpha![
        0xff00aa03, 0xe0008008, 0xf4008c16, 0xe2008b23,
        0xd1008331, 0xc0007840, 0xb6006f53, 0xaf006f6c,
        0xc8007fbf, 0xc2007ac7, 0xb60074d6, 0x59003bed,
    ],
    Some(Color::WHITE),
);

pub const PLUM: ColorScale = ColorScale::new(
    solid![
        0xfefcff, 0xfdf7fd, 0xfbebfb, 0xf7def8,
        0xf2d1f3, 0xe9c2ec, 0xdeade3, 0xcf91d8,
        0xab4aba, 0xa144af, 0x953ea3, 0x53195d,
    ],
    solid![
        0x181118, 0x201320, 0x351a35, 0x451d47,
        0x512454, 0x5e3061, 0x734079, 0x92549c,
        0xab4aba, 0xb658c4, 0xe796f3, 0xf4d4f4,
    ],
    alpha![
        0xaa00ff03, 0xc000c008, 0xcc00cc14, 0xc200c921,
        0xb700bd2e, 0xa400b03d, 0x9900a852, 0x9000a56e,
        0x89009eb5, 0x7f0092bb, 0x730086c1, 0x40004be6,
    ],
    Some(Color::WHITE),
);

pub const PURPLE: ColorScale = ColorScale::new(
    solid![
        0xfefcfe, 0xfbf7fe, 0xf7edfe, 0xf2e2fc,
        0xead5f9, 0xe0c4f4, 0xd1afec, 0xbe93e4,
        0x8e4ec6, 0x8347b9, 0x8145b5, 0x402060,
    ],
    solid![
        0x18111b, 0x1e1523, 0x301c3b, 0x3d224e,
        0x48295c, 0x54346b, 0x664282, 0x8457aa,
        0x8e4ec6, 0x9a5cd0, 0xd19dff, 0xecd9fa,
    ],
    alpha![
        0xaa00aa03, 0x8000e008, 0x8e00f112, 0x8d00e51d,
        0x8000db2a, 0x7a01d03b, 0x6d00c350, 0x6600c06c,
        0x5c00adb1, 0x53009eb8, 0x52009aba, 0x250049df,
    ],
    Some(Color::WHITE),
);

pub const VIOLET: ColorScale = ColorScale::new(
    solid![
        0xfdfcfe, 0xfaf8ff, 0xf4f0fe, 0xebe4ff,
        0xe1d9ff, 0xd4cafe, 0xc2b5f5, 0xaa99ec,
        0x6e56cf, 0x654dc4, 0x6550b9, 0x2f265f,
    ],
    solid![
        0x14121f, 0x1b1525, 0x291f43, 0x33255b,
        0x3c2e69, 0x473876, 0x56468b, 0x6958ad,
        0x6e56cf, 0x7d66d9, 0xbaa7ff, 0xe2ddfe,
    ],
    alpha![
        0x5500aa03, 0x4900ff07, 0x4400ee0f, 0x4300ff1b,
        0x3600ff26, 0x3100fb35, 0x2d01dd4a, 0x2b00d066,
        0x2400b7a9, 0x2300abb2, 0x1f0099af, 0x0b0043d9,
    ],
    Some(Color::WHITE),
);

pub const IRIS: ColorScale = ColorScale::new(
    solid![
        0xfdfdff, 0xf8f8ff, 0xf0f1fe, 0xe6e7ff,
        0xdadcff, 0xcbcdff, 0xb8baf8, 0x9b9ef0,
        0x5b5bd6, 0x5151cd, 0x5753c6, 0x272962,
    ],
    solid![
        0x13131e, 0x171625, 0x202248, 0x262a65,
        0x303374, 0x3d3e82, 0x4a4a95, 0x5958b1,
        0x5b5bd6, 0x6e6ade, 0xb1a9ff, 0xe0dffe,
    ],
    alpha![
        0x0000ff02, 0x0000ff07, 0x0011ee0f, 0x000bff19,
        0x000eff25, 0x000aff34, 0x0008e647, 0x0008d964,
        0x0000c0a4, 0x0000b6ae, 0x0600abac, 0x000246d8,
    ],
    Some(Color::WHITE),
);

pub const INDIGO: ColorScale = ColorScale::new(
    solid![
        0xfdfdfe, 0xf7f9ff, 0xedf2fe, 0xe1e9ff,
        0xd2deff, 0xc1d0ff, 0xabbdf9, 0x8da4ef,
        0x3e63dd, 0x3358d4, 0x3a5bc7, 0x1f2d5c,
    ],
    solid![
        0x11131f, 0x141726, 0x182449, 0x1d2e62,
        0x253974, 0x304384, 0x3a4f97, 0x435db1,
        0x3e63dd, 0x5472e4, 0x9eb1ff, 0xd6e1ff,
    ],
    alpha![
        0x00008002, 0x0040ff08, 0x0047f112, 0x0044ff1e,
        0x0044ff2d, 0x003eff3e, 0x0037ed54, 0x0034dc72,
        0x0031d2c1, 0x002ec9cc, 0x002bb7c5, 0x001046e0,
    ],
    Some(Color::WHITE),
);

pub const BLUE: ColorScale = ColorScale::new(
    solid![
        0xfbfdff, 0xf4faff, 0xe6f4fe, 0xd5efff,
        0xc2e5ff, 0xacd8fc, 0x8ec8f6, 0x5eb1ef,
        0x0090ff, 0x0588f0, 0x0d74ce, 0x113264,
    ],
    solid![
        0x0d1520, 0x111927, 0x0d2847, 0x003362,
        0x004074, 0x104d87, 0x205d9e, 0x2870bd,
        0x0090ff, 0x3b9eff, 0x70b8ff, 0xc2e6ff,
    ],
    alpha![
        0x0080ff04, 0x008cff0b, 0x008ff519, 0x009eff2a,
        0x0093ff3d, 0x0088f653, 0x0083eb71, 0x0084e6a1,
        0x0090ffff, 0x0086f0fa, 0x006dcbf2, 0x002359ee,
    ],
    Some(Color::WHITE),
);

pub const CYAN: ColorScale = ColorScale::new(
    solid![
        0xfafdfe, 0xf2fafb, 0xdef7f9, 0xcaf1f6,
        0xb5e9f0, 0x9ddde7, 0x7dcedc, 0x3db9cf,
        0x00a2c7, 0x0797b9, 0x107d98, 0x0d3c48,
    ],
    solid![
        0x0b161a, 0x101b20, 0x082c36, 0x003848,
        0x004558, 0x045468, 0x12677e, 0x11809c,
        0x00a2c7, 0x23afd0, 0x4ccce6, 0xb6ecf7,
    ],
    alpha![
        0x0099cc05, 0x009db10d, 0x00c2d121, 0x00bcd435,
        0x01b4cc4a, 0x00a7c162, 0x009fbb82, 0x00a3c0c2,
        0x00a2c7ff, 0x0094b7f8, 0x007491ef, 0x00323ef2,
    ],
    Some(Color::WHITE),
);

pub const TEAL: ColorScale = ColorScale::new(
    solid![
        0xfafefd, 0xf3fbf9, 0xe0f8f3, 0xccf3ea,
        0xb8eae0, 0xa1ded2, 0x83cdc1, 0x53b9ab,
        0x12a594, 0x0d9b8a, 0x008573, 0x0d3d38,
    ],
    solid![
        0x0d1514, 0x111c1b, 0x0d2d2a, 0x023b37,
        0x084843, 0x145750, 0x1c6961, 0x207e73,
        0x12a594, 0x0eb39e, 0x0bd8b6, 0xadf0dd,
    ],
    alpha![
        0x00cc9905, 0x00aa800c, 0x00c69d1f, 0x00c39633,
        0x00b49047, 0x00a6855e, 0x0099807c, 0x009783ac,
        0x009e8ced, 0x009684f2, 0x008573ff, 0x00332df2,
    ],
    Some(Color::WHITE),
);

pub const JADE: ColorScale = ColorScale::new(
    solid![
        0xfbfefd, 0xf4fbf7, 0xe6f7ed, 0xd6f1e3,
        0xc3e9d7, 0xacdec8, 0x8bceb6, 0x56ba9f,
        0x29a383, 0x26997b, 0x208368, 0x1d3b31,
    ],
    solid![
        0x0d1512, 0x121c18, 0x0f2e22, 0x0b3b2c,
        0x114837, 0x1b5745, 0x246854, 0x2a7e68,
        0x29a383, 0x27b08b, 0x1fd8a4, 0xadf0d4,
    ],
    alpha![
        0x00c08004, 0x00a3460b, 0x00ae4819, 0x00a85129,
        0x00a2553c, 0x009a5753, 0x00945f74, 0x00976ea9,
        0x00916bd6, 0x008764d9, 0x007152df, 0x002217e2,
    ],
    Some(Color::WHITE),
);

pub const GREEN: ColorScale = ColorScale::new(
    solid![
        0xfbfefc, 0xf4fbf6, 0xe6f6eb, 0xd6f1df,
        0xc4e8d1, 0xadddc0, 0x8eceaa, 0x5bb98b,
        0x30a46c, 0x2b9a66, 0x218358, 0x193b2d,
    ],
    solid![
        0x0e1512, 0x121b17, 0x132d21, 0x113b29,
        0x174933, 0x20573e, 0x28684a, 0x2f7c57,
        0x30a46c, 0x33b074, 0x3dd68c, 0xb1f1cb,
    ],
    alpha![
        0x00c04004, 0x00a32f0b, 0x00a43319, 0x00a83829,
        0x019c393b, 0x00963c52, 0x00914071, 0x00924ba4,
        0x008f4acf, 0x008647d4, 0x00713fde, 0x002616e6,
    ],
    Some(Color::WHITE),
);

pub const GRASS: ColorScale = ColorScale::new(
    solid![
        0xfbfefb, 0xf5fbf5, 0xe9f6e9, 0xdaf1db,
        0xc9e8ca, 0xb2ddb5, 0x94ce9a, 0x65ba74,
        0x46a758, 0x3e9b4f, 0x2a7e3b, 0x203c25,
    ],
    solid![
        0x0e1511, 0x141a15, 0x1b2a1e, 0x1d3a24,
        0x25482d, 0x2d5736, 0x366740, 0x3e7949,
        0x46a758, 0x53b365, 0x71d083, 0xc2f0c2,
    ],
    alpha![
        0x00c00004, 0x0099000a, 0x00970016, 0x009f0725,
        0x00930536, 0x008f0a4d, 0x018b0f6b, 0x008d199a,
        0x008619b9, 0x007b17c1, 0x006514d5, 0x002006df,
    ],
    Some(Color::WHITE),
);

pub const BRONZE: ColorScale = ColorScale::new(
    solid![
        0xfdfcfc, 0xfdf7f5, 0xf6edea, 0xefe4df,
        0xe7d9d3, 0xdfcdc5, 0xd3bcb3, 0xc2a499,
        0xa18072, 0x957468, 0x7d5e54, 0x43302b,
    ],
    solid![
        0x141110, 0x1c1917, 0x262220, 0x302a27,
        0x3b3330, 0x493e3a, 0x5a4c47, 0x6f5f58,
        0xa18072, 0xae8c7e, 0xd4b3a5, 0xede0d9,
    ],
    alpha![
        0x55000003, 0xcc330008, 0x92250015, 0x80280020,
        0x7423002c, 0x7324003a, 0x6c1f004c, 0x671c0066,
        0x551a008d, 0x4c150097, 0x3d0f00ab, 0x1d0600d4,
    ],
    Some(Color::WHITE),
);

pub const GOLD: ColorScale = ColorScale::new(
    solid![
        0xfdfdfc, 0xfaf9f2, 0xf2f0e7, 0xeae6db,
        0xe1dccf, 0xd8d0bf, 0xcbc0aa, 0xb9a88d,
        0x978365, 0x8c7a5e, 0x71624b, 0x3b352b,
    ],
    solid![
        0x121211, 0x1b1a17, 0x24231f, 0x2d2b26,
        0x38352e, 0x444039, 0x544f46, 0x696256,
        0x978365, 0xa39073, 0xcbb99f, 0xe8e2d9,
    ],
    alpha![
        0x55550003, 0x9d8a000d, 0x75600018, 0x6b4e0024,
        0x60460030, 0x64440040, 0x63420055, 0x633d0072,
        0x5332009a, 0x50300da1, 0x3f2400b4, 0x1b1000d4,
    ],
    Some(Color::WHITE),
);

pub const BROWN: ColorScale = ColorScale::new(
    solid![
        0xfefdfc, 0xfcf9f6, 0xf6eee7, 0xf0e4d9,
        0xebdaca, 0xe4cdb7, 0xdcbc9f, 0xcea37e,
        0xad7f58, 0xa07553, 0x815e46, 0x3e332e,
    ],
    solid![
        0x12110f, 0x1c1816, 0x28211d, 0x322922,
        0x3e3128, 0x4d3c2f, 0x614a39, 0x7c5f46,
        0xad7f58, 0xb88c67, 0xdbb594, 0xf2e1ca,
    ],
    alpha![
        0xaa550003, 0xaa550009, 0xa04b0018, 0x9b4a0026,
        0x9f4d0035, 0xa04e0048, 0xa34e0060, 0x9f4a0081,
        0x823c00a7, 0x723300ac, 0x522100b9, 0x140600d1,
    ],
    Some(Color::WHITE),
);

pub const ORANGE: ColorScale = ColorScale::new(
    solid![
        0xfefcfb, 0xfff7ed, 0xffefd6, 0xffdfb5,
        0xffd19a, 0xffc182, 0xf5ae73, 0xec9455,
        0xf76b15, 0xef5f00, 0xcc4e00, 0x582d1d,
    ],
    solid![
        0x17120e, 0x1e160f, 0x331e0b, 0x462100,
        0x562800, 0x66350c, 0x7e451d, 0xa35829,
        0xf76b15, 0xff801f, 0xffa057, 0xffe0c2,
    ],
    alpha![
        0xc0400004, 0xff8e0012, 0xff9c0029, 0xff91014a,
        0xff8b0065, 0xff81007d, 0xed6c008c, 0xe35f00aa,
        0xf65e00ea, 0xef5f00ff, 0xcc4e00ff, 0x431200e2,
    ],
    Some(Color::WHITE),
);

pub const AMBER: ColorScale = ColorScale::new(
    solid![
        0xfefdfb, 0xfefbe9, 0xfff7c2, 0xffee9c,
        0xfbe577, 0xf3d673, 0xe9c162, 0xe2a336,
        0xffc53d, 0xffba18, 0xab6400, 0x4f3422,
    ],
    solid![
        0x16120c, 0x1d180f, 0x302008, 0x3f2700,
        0x4d3000, 0x5c3d05, 0x714f19, 0x8f6424,
        0xffc53d, 0xffd60a, 0xffca16, 0xffe7b3,
    ],
    alpha![
        0xc0800004, 0xf4d10016, 0xffde003d, 0xffd40063,
        0xf8cf0088, 0xeab5008c, 0xdc9b009d, 0xda8a00c9,
        0xffb300c2, 0xffb300e7, 0xab6400ff, 0x341500dd,
    ],
    Some(Color::from_hex(0x21201c)),
);

pub const YELLOW: ColorScale = ColorScale::new(
    solid![
        0xfdfdf9, 0xfefce9, 0xfffab8, 0xfff394,
        0xffe770, 0xf3d768, 0xe4c767, 0xd5ae39,
        0xffe629, 0xffdc00, 0x9e6c00, 0x473b1f,
    ],
    solid![
        0x14120b, 0x1b180f, 0x2d2305, 0x362b00,
        0x433500, 0x524202, 0x665417, 0x836a21,
        0xffe629, 0xffff57, 0xf5e147, 0xf6eeb4,
    ],
    alpha![
        0xaaaa0006, 0xf4dd0016, 0xffee0047, 0xffe3016b,
        0xffd5008f, 0xebbc0097, 0xd2a10098, 0xc99700c6,
        0xffe100d6, 0xffdc00ff, 0x9e6c00ff, 0x2e2000e0,
    ],
    Some(Color::from_hex(0x21201c)),
);

pub const LIME: ColorScale = ColorScale::new(
    solid![
        0xfcfdfa, 0xf8faf3, 0xeef6d6, 0xe2f0bd,
        0xd3e7a6, 0xc2da91, 0xabc978, 0x8db654,
        0xbdee63, 0xb0e64c, 0x5c7c2f, 0x37401c,
    ],
    solid![
        0x11130c, 0x151a10, 0x1f2917, 0x29371d,
        0x334423, 0x3d522a, 0x496231, 0x577538,
        0xbdee63, 0xd4ff70, 0xbde56c, 0xe3f7ba,
    ],
    alpha![
        0x66990005, 0x6b95000c, 0x96c80029, 0x8fc60042,
        0x81bb0059, 0x72aa006e, 0x61990087, 0x559200ab,
        0x93e4009c, 0x8fdc00b3, 0x375f00d0, 0x1e2900e3,
    ],
    Some(Color::from_hex(0x1d211c)),
);

pub const MINT: ColorScale = ColorScale::new(
    solid![
        0xf9fefd, 0xf2fbf9, 0xddf9f2, 0xc8f4e9,
        0xb3ecde, 0x9ce0d0, 0x7ecfbd, 0x4cbba5,
        0x86ead4, 0x7de0cb, 0x027864, 0x16433c,
    ],
    solid![
        0x0e1515, 0x0f1b1b, 0x092c2b, 0x003a38,
        0x004744, 0x105650, 0x1e685f, 0x277f70,
        0x86ead4, 0xa8f5e5, 0x58d5ba, 0xc4f5e1,
    ],
    alpha![
        0x00d5aa06, 0x00b18a0d, 0x00d29e22, 0x00cc9937,
        0x00c0914c, 0x00b08663, 0x00a17d81, 0x009e7fb3,
        0x00d3a579, 0x00c39982, 0x007763fd, 0x00312ae9,
    ],
    Some(Color::from_hex(0x1a211e)),
);

pub const SKY: ColorScale = ColorScale::new(
    solid![
        0xf9feff, 0xf1fafd, 0xe1f6fd, 0xd1f0fa,
        0xbee7f5, 0xa9daed, 0x8dcae3, 0x60b3d7,
        0x7ce2fe, 0x74daf8, 0x00749e, 0x1d3e56,
    ],
    solid![
        0x0d141f, 0x111a27, 0x112840, 0x113555,
        0x154467, 0x1b537b, 0x1f6692, 0x197cae,
        0x7ce2fe, 0xa8eeff, 0x75c7f0, 0xc2f3ff,
    ],
    alpha![
        0x00d5ff06, 0x00a4db0e, 0x00b3ee1e, 0x00ace42e,
        0x00a1d841, 0x0092ca56, 0x0089c172, 0x0085bf9f,
        0x00c7fe83, 0x00bcf38b, 0x00749eff, 0x002540e2,
    ],
    Some(Color::from_hex(0x1c2024)),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_complete() {
        let palette = palette();
        for name in ColorName::ALL {
            assert!(palette.contains_key(&name), "{name}");
        }
    }

    #[test]
    fn test_red_reference_steps() {
        assert_eq!(RED.light.get(9), Some(Color::from_hex(0xe5484d)));
        assert_eq!(RED.dark.get(9), Some(Color::from_hex(0xe5484d)));
        assert_eq!(RED.alpha.get(3).map(|c| c.to_string()).as_deref(), Some("#f3000d14"));
    }

    #[test]
    fn test_light_accents_have_dark_contrast() {
        for name in ColorName::LIGHT_ACCENTS {
            let contrast = color_scale(name).contrast.unwrap();
            assert!(contrast.r < 0x40, "{name}");
        }
        assert_eq!(BLUE.contrast, Some(Color::WHITE));
    }

    #[test]
    fn test_overlay_scales() {
        assert_eq!(BLACK_ALPHA.get(12).unwrap().a, 0xf2);
        assert_eq!(WHITE_ALPHA.get(1).unwrap(), Color::rgba(255, 255, 255, 0x0d));
    }
}
