//! Diagnostic labels for the two opcode pages, logged on dispatch.

const LABELS: [&str; 256] = [
  "0x00; NOP",
  "0x01; LD BC, u16",
  "0x02; LD (BC), A",
  "0x03; INC BC",
  "0x04; INC B",
  "0x05; DEC B",
  "0x06; LD B, u8",
  "0x07; RLCA",
  "0x08; LD (u16), SP",
  "0x09; ADD HL, BC",
  "0x0A; LD A, (BC)",
  "0x0B; DEC BC",
  "0x0C; INC C",
  "0x0D; DEC C",
  "0x0E; LD C, u8",
  "0x0F; RRCA",
  "0x10; STOP",
  "0x11; LD DE, u16",
  "0x12; LD (DE), A",
  "0x13; INC DE",
  "0x14; INC D",
  "0x15; DEC D",
  "0x16; LD D, u8",
  "0x17; RLA",
  "0x18; JR i8",
  "0x19; ADD HL, DE",
  "0x1A; LD A, (DE)",
  "0x1B; DEC DE",
  "0x1C; INC E",
  "0x1D; DEC E",
  "0x1E; LD E, u8",
  "0x1F; RRA",
  "0x20; JR NZ, i8",
  "0x21; LD HL, u16",
  "0x22; LD (HL+), A",
  "0x23; INC HL",
  "0x24; INC H",
  "0x25; DEC H",
  "0x26; LD H, u8",
  "0x27; DAA",
  "0x28; JR Z, i8",
  "0x29; ADD HL, HL",
  "0x2A; LD A, (HL+)",
  "0x2B; DEC HL",
  "0x2C; INC L",
  "0x2D; DEC L",
  "0x2E; LD L, u8",
  "0x2F; CPL",
  "0x30; JR NC, i8",
  "0x31; LD SP, u16",
  "0x32; LD (HL-), A",
  "0x33; INC SP",
  "0x34; INC (HL)",
  "0x35; DEC (HL)",
  "0x36; LD (HL), u8",
  "0x37; SCF",
  "0x38; JR C, i8",
  "0x39; ADD HL, SP",
  "0x3A; LD A, (HL-)",
  "0x3B; DEC SP",
  "0x3C; INC A",
  "0x3D; DEC A",
  "0x3E; LD A, u8",
  "0x3F; CCF",
  "0x40; LD B, B",
  "0x41; LD B, C",
  "0x42; LD B, D",
  "0x43; LD B, E",
  "0x44; LD B, H",
  "0x45; LD B, L",
  "0x46; LD B, (HL)",
  "0x47; LD B, A",
  "0x48; LD C, B",
  "0x49; LD C, C",
  "0x4A; LD C, D",
  "0x4B; LD C, E",
  "0x4C; LD C, H",
  "0x4D; LD C, L",
  "0x4E; LD C, (HL)",
  "0x4F; LD C, A",
  "0x50; LD D, B",
  "0x51; LD D, C",
  "0x52; LD D, D",
  "0x53; LD D, E",
  "0x54; LD D, H",
  "0x55; LD D, L",
  "0x56; LD D, (HL)",
  "0x57; LD D, A",
  "0x58; LD E, B",
  "0x59; LD E, C",
  "0x5A; LD E, D",
  "0x5B; LD E, E",
  "0x5C; LD E, H",
  "0x5D; LD E, L",
  "0x5E; LD E, (HL)",
  "0x5F; LD E, A",
  "0x60; LD H, B",
  "0x61; LD H, C",
  "0x62; LD H, D",
  "0x63; LD H, E",
  "0x64; LD H, H",
  "0x65; LD H, L",
  "0x66; LD H, (HL)",
  "0x67; LD H, A",
  "0x68; LD L, B",
  "0x69; LD L, C",
  "0x6A; LD L, D",
  "0x6B; LD L, E",
  "0x6C; LD L, H",
  "0x6D; LD L, L",
  "0x6E; LD L, (HL)",
  "0x6F; LD L, A",
  "0x70; LD (HL), B",
  "0x71; LD (HL), C",
  "0x72; LD (HL), D",
  "0x73; LD (HL), E",
  "0x74; LD (HL), H",
  "0x75; LD (HL), L",
  "0x76; HALT",
  "0x77; LD (HL), A",
  "0x78; LD A, B",
  "0x79; LD A, C",
  "0x7A; LD A, D",
  "0x7B; LD A, E",
  "0x7C; LD A, H",
  "0x7D; LD A, L",
  "0x7E; LD A, (HL)",
  "0x7F; LD A, A",
  "0x80; ADD A, B",
  "0x81; ADD A, C",
  "0x82; ADD A, D",
  "0x83; ADD A, E",
  "0x84; ADD A, H",
  "0x85; ADD A, L",
  "0x86; ADD A, (HL)",
  "0x87; ADD A, A",
  "0x88; ADC A, B",
  "0x89; ADC A, C",
  "0x8A; ADC A, D",
  "0x8B; ADC A, E",
  "0x8C; ADC A, H",
  "0x8D; ADC A, L",
  "0x8E; ADC A, (HL)",
  "0x8F; ADC A, A",
  "0x90; SUB A, B",
  "0x91; SUB A, C",
  "0x92; SUB A, D",
  "0x93; SUB A, E",
  "0x94; SUB A, H",
  "0x95; SUB A, L",
  "0x96; SUB A, (HL)",
  "0x97; SUB A, A",
  "0x98; SBC A, B",
  "0x99; SBC A, C",
  "0x9A; SBC A, D",
  "0x9B; SBC A, E",
  "0x9C; SBC A, H",
  "0x9D; SBC A, L",
  "0x9E; SBC A, (HL)",
  "0x9F; SBC A, A",
  "0xA0; AND A, B",
  "0xA1; AND A, C",
  "0xA2; AND A, D",
  "0xA3; AND A, E",
  "0xA4; AND A, H",
  "0xA5; AND A, L",
  "0xA6; AND A, (HL)",
  "0xA7; AND A, A",
  "0xA8; XOR A, B",
  "0xA9; XOR A, C",
  "0xAA; XOR A, D",
  "0xAB; XOR A, E",
  "0xAC; XOR A, H",
  "0xAD; XOR A, L",
  "0xAE; XOR A, (HL)",
  "0xAF; XOR A, A",
  "0xB0; OR A, B",
  "0xB1; OR A, C",
  "0xB2; OR A, D",
  "0xB3; OR A, E",
  "0xB4; OR A, H",
  "0xB5; OR A, L",
  "0xB6; OR A, (HL)",
  "0xB7; OR A, A",
  "0xB8; CP A, B",
  "0xB9; CP A, C",
  "0xBA; CP A, D",
  "0xBB; CP A, E",
  "0xBC; CP A, H",
  "0xBD; CP A, L",
  "0xBE; CP A, (HL)",
  "0xBF; CP A, A",
  "0xC0; RET NZ",
  "0xC1; POP BC",
  "0xC2; JP NZ, u16",
  "0xC3; JP u16",
  "0xC4; CALL NZ, u16",
  "0xC5; PUSH BC",
  "0xC6; ADD A, u8",
  "0xC7; RST 00h",
  "0xC8; RET Z",
  "0xC9; RET",
  "0xCA; JP Z, u16",
  "0xCB; PREFIX CB",
  "0xCC; CALL Z, u16",
  "0xCD; CALL u16",
  "0xCE; ADC A, u8",
  "0xCF; RST 08h",
  "0xD0; RET NC",
  "0xD1; POP DE",
  "0xD2; JP NC, u16",
  "0xD3; INVALID",
  "0xD4; CALL NC, u16",
  "0xD5; PUSH DE",
  "0xD6; SUB A, u8",
  "0xD7; RST 10h",
  "0xD8; RET C",
  "0xD9; RETI",
  "0xDA; JP C, u16",
  "0xDB; INVALID",
  "0xDC; CALL C, u16",
  "0xDD; INVALID",
  "0xDE; SBC A, u8",
  "0xDF; RST 18h",
  "0xE0; LD (FF00+u8), A",
  "0xE1; POP HL",
  "0xE2; LD (FF00+C), A",
  "0xE3; INVALID",
  "0xE4; INVALID",
  "0xE5; PUSH HL",
  "0xE6; AND A, u8",
  "0xE7; RST 20h",
  "0xE8; ADD SP, i8",
  "0xE9; JP HL",
  "0xEA; LD (u16), A",
  "0xEB; INVALID",
  "0xEC; INVALID",
  "0xED; INVALID",
  "0xEE; XOR A, u8",
  "0xEF; RST 28h",
  "0xF0; LD A, (FF00+u8)",
  "0xF1; POP AF",
  "0xF2; LD A, (FF00+C)",
  "0xF3; DI",
  "0xF4; INVALID",
  "0xF5; PUSH AF",
  "0xF6; OR A, u8",
  "0xF7; RST 30h",
  "0xF8; LD HL, SP+i8",
  "0xF9; LD SP, HL",
  "0xFA; LD A, (u16)",
  "0xFB; EI",
  "0xFC; INVALID",
  "0xFD; INVALID",
  "0xFE; CP A, u8",
  "0xFF; RST 38h",
];

const CB_LABELS: [&str; 256] = [
  "CBx00; RLC B",
  "CBx01; RLC C",
  "CBx02; RLC D",
  "CBx03; RLC E",
  "CBx04; RLC H",
  "CBx05; RLC L",
  "CBx06; RLC (HL)",
  "CBx07; RLC A",
  "CBx08; RRC B",
  "CBx09; RRC C",
  "CBx0A; RRC D",
  "CBx0B; RRC E",
  "CBx0C; RRC H",
  "CBx0D; RRC L",
  "CBx0E; RRC (HL)",
  "CBx0F; RRC A",
  "CBx10; RL B",
  "CBx11; RL C",
  "CBx12; RL D",
  "CBx13; RL E",
  "CBx14; RL H",
  "CBx15; RL L",
  "CBx16; RL (HL)",
  "CBx17; RL A",
  "CBx18; RR B",
  "CBx19; RR C",
  "CBx1A; RR D",
  "CBx1B; RR E",
  "CBx1C; RR H",
  "CBx1D; RR L",
  "CBx1E; RR (HL)",
  "CBx1F; RR A",
  "CBx20; SLA B",
  "CBx21; SLA C",
  "CBx22; SLA D",
  "CBx23; SLA E",
  "CBx24; SLA H",
  "CBx25; SLA L",
  "CBx26; SLA (HL)",
  "CBx27; SLA A",
  "CBx28; SRA B",
  "CBx29; SRA C",
  "CBx2A; SRA D",
  "CBx2B; SRA E",
  "CBx2C; SRA H",
  "CBx2D; SRA L",
  "CBx2E; SRA (HL)",
  "CBx2F; SRA A",
  "CBx30; SWAP B",
  "CBx31; SWAP C",
  "CBx32; SWAP D",
  "CBx33; SWAP E",
  "CBx34; SWAP H",
  "CBx35; SWAP L",
  "CBx36; SWAP (HL)",
  "CBx37; SWAP A",
  "CBx38; SRL B",
  "CBx39; SRL C",
  "CBx3A; SRL D",
  "CBx3B; SRL E",
  "CBx3C; SRL H",
  "CBx3D; SRL L",
  "CBx3E; SRL (HL)",
  "CBx3F; SRL A",
  "CBx40; BIT 0, B",
  "CBx41; BIT 0, C",
  "CBx42; BIT 0, D",
  "CBx43; BIT 0, E",
  "CBx44; BIT 0, H",
  "CBx45; BIT 0, L",
  "CBx46; BIT 0, (HL)",
  "CBx47; BIT 0, A",
  "CBx48; BIT 1, B",
  "CBx49; BIT 1, C",
  "CBx4A; BIT 1, D",
  "CBx4B; BIT 1, E",
  "CBx4C; BIT 1, H",
  "CBx4D; BIT 1, L",
  "CBx4E; BIT 1, (HL)",
  "CBx4F; BIT 1, A",
  "CBx50; BIT 2, B",
  "CBx51; BIT 2, C",
  "CBx52; BIT 2, D",
  "CBx53; BIT 2, E",
  "CBx54; BIT 2, H",
  "CBx55; BIT 2, L",
  "CBx56; BIT 2, (HL)",
  "CBx57; BIT 2, A",
  "CBx58; BIT 3, B",
  "CBx59; BIT 3, C",
  "CBx5A; BIT 3, D",
  "CBx5B; BIT 3, E",
  "CBx5C; BIT 3, H",
  "CBx5D; BIT 3, L",
  "CBx5E; BIT 3, (HL)",
  "CBx5F; BIT 3, A",
  "CBx60; BIT 4, B",
  "CBx61; BIT 4, C",
  "CBx62; BIT 4, D",
  "CBx63; BIT 4, E",
  "CBx64; BIT 4, H",
  "CBx65; BIT 4, L",
  "CBx66; BIT 4, (HL)",
  "CBx67; BIT 4, A",
  "CBx68; BIT 5, B",
  "CBx69; BIT 5, C",
  "CBx6A; BIT 5, D",
  "CBx6B; BIT 5, E",
  "CBx6C; BIT 5, H",
  "CBx6D; BIT 5, L",
  "CBx6E; BIT 5, (HL)",
  "CBx6F; BIT 5, A",
  "CBx70; BIT 6, B",
  "CBx71; BIT 6, C",
  "CBx72; BIT 6, D",
  "CBx73; BIT 6, E",
  "CBx74; BIT 6, H",
  "CBx75; BIT 6, L",
  "CBx76; BIT 6, (HL)",
  "CBx77; BIT 6, A",
  "CBx78; BIT 7, B",
  "CBx79; BIT 7, C",
  "CBx7A; BIT 7, D",
  "CBx7B; BIT 7, E",
  "CBx7C; BIT 7, H",
  "CBx7D; BIT 7, L",
  "CBx7E; BIT 7, (HL)",
  "CBx7F; BIT 7, A",
  "CBx80; RES 0, B",
  "CBx81; RES 0, C",
  "CBx82; RES 0, D",
  "CBx83; RES 0, E",
  "CBx84; RES 0, H",
  "CBx85; RES 0, L",
  "CBx86; RES 0, (HL)",
  "CBx87; RES 0, A",
  "CBx88; RES 1, B",
  "CBx89; RES 1, C",
  "CBx8A; RES 1, D",
  "CBx8B; RES 1, E",
  "CBx8C; RES 1, H",
  "CBx8D; RES 1, L",
  "CBx8E; RES 1, (HL)",
  "CBx8F; RES 1, A",
  "CBx90; RES 2, B",
  "CBx91; RES 2, C",
  "CBx92; RES 2, D",
  "CBx93; RES 2, E",
  "CBx94; RES 2, H",
  "CBx95; RES 2, L",
  "CBx96; RES 2, (HL)",
  "CBx97; RES 2, A",
  "CBx98; RES 3, B",
  "CBx99; RES 3, C",
  "CBx9A; RES 3, D",
  "CBx9B; RES 3, E",
  "CBx9C; RES 3, H",
  "CBx9D; RES 3, L",
  "CBx9E; RES 3, (HL)",
  "CBx9F; RES 3, A",
  "CBxA0; RES 4, B",
  "CBxA1; RES 4, C",
  "CBxA2; RES 4, D",
  "CBxA3; RES 4, E",
  "CBxA4; RES 4, H",
  "CBxA5; RES 4, L",
  "CBxA6; RES 4, (HL)",
  "CBxA7; RES 4, A",
  "CBxA8; RES 5, B",
  "CBxA9; RES 5, C",
  "CBxAA; RES 5, D",
  "CBxAB; RES 5, E",
  "CBxAC; RES 5, H",
  "CBxAD; RES 5, L",
  "CBxAE; RES 5, (HL)",
  "CBxAF; RES 5, A",
  "CBxB0; RES 6, B",
  "CBxB1; RES 6, C",
  "CBxB2; RES 6, D",
  "CBxB3; RES 6, E",
  "CBxB4; RES 6, H",
  "CBxB5; RES 6, L",
  "CBxB6; RES 6, (HL)",
  "CBxB7; RES 6, A",
  "CBxB8; RES 7, B",
  "CBxB9; RES 7, C",
  "CBxBA; RES 7, D",
  "CBxBB; RES 7, E",
  "CBxBC; RES 7, H",
  "CBxBD; RES 7, L",
  "CBxBE; RES 7, (HL)",
  "CBxBF; RES 7, A",
  "CBxC0; SET 0, B",
  "CBxC1; SET 0, C",
  "CBxC2; SET 0, D",
  "CBxC3; SET 0, E",
  "CBxC4; SET 0, H",
  "CBxC5; SET 0, L",
  "CBxC6; SET 0, (HL)",
  "CBxC7; SET 0, A",
  "CBxC8; SET 1, B",
  "CBxC9; SET 1, C",
  "CBxCA; SET 1, D",
  "CBxCB; SET 1, E",
  "CBxCC; SET 1, H",
  "CBxCD; SET 1, L",
  "CBxCE; SET 1, (HL)",
  "CBxCF; SET 1, A",
  "CBxD0; SET 2, B",
  "CBxD1; SET 2, C",
  "CBxD2; SET 2, D",
  "CBxD3; SET 2, E",
  "CBxD4; SET 2, H",
  "CBxD5; SET 2, L",
  "CBxD6; SET 2, (HL)",
  "CBxD7; SET 2, A",
  "CBxD8; SET 3, B",
  "CBxD9; SET 3, C",
  "CBxDA; SET 3, D",
  "CBxDB; SET 3, E",
  "CBxDC; SET 3, H",
  "CBxDD; SET 3, L",
  "CBxDE; SET 3, (HL)",
  "CBxDF; SET 3, A",
  "CBxE0; SET 4, B",
  "CBxE1; SET 4, C",
  "CBxE2; SET 4, D",
  "CBxE3; SET 4, E",
  "CBxE4; SET 4, H",
  "CBxE5; SET 4, L",
  "CBxE6; SET 4, (HL)",
  "CBxE7; SET 4, A",
  "CBxE8; SET 5, B",
  "CBxE9; SET 5, C",
  "CBxEA; SET 5, D",
  "CBxEB; SET 5, E",
  "CBxEC; SET 5, H",
  "CBxED; SET 5, L",
  "CBxEE; SET 5, (HL)",
  "CBxEF; SET 5, A",
  "CBxF0; SET 6, B",
  "CBxF1; SET 6, C",
  "CBxF2; SET 6, D",
  "CBxF3; SET 6, E",
  "CBxF4; SET 6, H",
  "CBxF5; SET 6, L",
  "CBxF6; SET 6, (HL)",
  "CBxF7; SET 6, A",
  "CBxF8; SET 7, B",
  "CBxF9; SET 7, C",
  "CBxFA; SET 7, D",
  "CBxFB; SET 7, E",
  "CBxFC; SET 7, H",
  "CBxFD; SET 7, L",
  "CBxFE; SET 7, (HL)",
  "CBxFF; SET 7, A",
];

pub fn label(op: u8) -> &'static str {
  LABELS[op as usize]
}

pub fn cb_label(op: u8) -> &'static str {
  CB_LABELS[op as usize]
}
