//! Embedded gamma challenge data.
//!
//! Generated by `gamma-keygen` for the release key; regenerate with
//! `gamma-keygen --key <new key>` and paste the output over these arrays
//! to re-key the challenge. The code blob is opaque without the key: each
//! byte only means something after XOR with the keyed chaos stream.

pub const ENCRYPTED_CODE: [u8; 256] = [
    0x57, 0x76, 0xA9, 0x08, 0xCF, 0x7B, 0x2F, 0xB0, 0x25, 0x7B, 0x85, 0x83,
    0x95, 0x1A, 0x94, 0x09, 0xDD, 0x24, 0x59, 0x5F, 0xEE, 0xA0, 0x3C, 0x10,
    0xF3, 0x1E, 0xC2, 0x51, 0xEA, 0xB1, 0x0D, 0x35, 0x0A, 0xDF, 0xED, 0x71,
    0xA8, 0x65, 0xCC, 0x66, 0xC3, 0x7D, 0x78, 0x64, 0x9B, 0x9F, 0xDC, 0x3A,
    0xC3, 0x91, 0xC6, 0x74, 0xEB, 0x48, 0x27, 0xE7, 0x18, 0x08, 0xD4, 0x96,
    0xB4, 0x27, 0x42, 0xAB, 0x46, 0xA6, 0x19, 0x53, 0x66, 0x79, 0xF4, 0xEA,
    0x2E, 0x20, 0x46, 0xEB, 0x8C, 0xB6, 0x32, 0xC6, 0xBF, 0x63, 0x76, 0xF1,
    0x0D, 0xE2, 0x51, 0xEC, 0x79, 0x84, 0xAC, 0x7B, 0xD4, 0x6A, 0xE8, 0x94,
    0x90, 0x7B, 0xD9, 0xFB, 0xA3, 0x22, 0x81, 0x3A, 0x3B, 0xF5, 0x71, 0x32,
    0xC4, 0xBA, 0x30, 0xCB, 0x65, 0xAD, 0x02, 0x0C, 0xE4, 0xB3, 0x1F, 0xB8,
    0xC4, 0x78, 0xC6, 0xEA, 0x94, 0xDB, 0x96, 0xF0, 0x91, 0x61, 0x9E, 0x29,
    0x0C, 0x82, 0x1E, 0xA4, 0x6A, 0xA4, 0x70, 0x8C, 0x5F, 0x24, 0x93, 0x84,
    0x00, 0x96, 0x65, 0xE9, 0xC6, 0xB5, 0x88, 0x9F, 0x12, 0x3C, 0xE8, 0x37,
    0x94, 0x98, 0x8D, 0xBA, 0xAA, 0xBB, 0x9A, 0x9B, 0x02, 0x82, 0xD8, 0x18,
    0x81, 0x08, 0xAC, 0x00, 0x0E, 0xCC, 0x2E, 0xE1, 0x30, 0x14, 0x6D, 0x0F,
    0x06, 0xDD, 0x71, 0x26, 0x00, 0x9A, 0xA7, 0xA9, 0x86, 0xB9, 0xBE, 0x89,
    0xB8, 0xBF, 0x66, 0x3D, 0xB8, 0x5A, 0x97, 0xD5, 0x0C, 0x85, 0xFF, 0xBD,
    0x33, 0x0C, 0x61, 0xCD, 0x25, 0x85, 0xE4, 0x91, 0x35, 0x19, 0x14, 0x83,
    0x0A, 0xAE, 0x46, 0x36, 0xE2, 0xE2, 0x7A, 0x40, 0x89, 0xE8, 0xBC, 0x32,
    0xA3, 0xE2, 0x38, 0x74, 0x14, 0x6D, 0x8C, 0x20, 0xC6, 0x2D, 0xC0, 0x44,
    0xFA, 0x06, 0x3F, 0x28, 0xCE, 0x30, 0xD9, 0xBE, 0xCA, 0x0A, 0xD9, 0x36,
    0xA5, 0xB5, 0x8B, 0xC4,
];

pub const SECRET_CIPHER: [u8; 45] = [
    0xDD, 0xF1, 0xF0, 0xF9, 0xEC, 0xFF, 0xEA, 0xEB, 0xF2, 0xFF, 0xEA, 0xF7,
    0xF1, 0xF0, 0xED, 0xBF, 0xBE, 0xCA, 0xF6, 0xFB, 0xBE, 0xD9, 0xFF, 0xF3,
    0xF3, 0xFF, 0xBE, 0xFD, 0xF1, 0xEC, 0xFB, 0xBE, 0xF7, 0xED, 0xBE, 0xFA,
    0xF7, 0xED, 0xED, 0xF1, 0xF2, 0xE8, 0xFB, 0xFA, 0xB0,
];
