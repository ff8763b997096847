use crate::formulas::{BinaryOp, FormulaType};

const INDEX_ENCODING_SHIFT: u8 = 4;
const TYPE_ENCODE_MASK: u8 = 0b0000_1111;

const ENCODING_TRUE: u8 = 0x01;
const ENCODING_FALSE: u8 = 0x02;
const ENCODING_VAR: u8 = 0x03;
const ENCODING_NOT: u8 = 0x04;
const ENCODING_AND: u8 = 0x05;
const ENCODING_OR: u8 = 0x06;
const ENCODING_IMPL: u8 = 0x07;
const ENCODING_XOR: u8 = 0x08;
const ENCODING_EQUIV: u8 = 0x09;
const ENCODING_NAND: u8 = 0x0A;
const ENCODING_NOR: u8 = 0x0B;

/// A packed formula reference: the four low bits hold the formula type, the
/// remaining bits hold the index into the respective factory cache.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct FormulaEncoding {
    pub(crate) encoding: u64,
}

impl FormulaEncoding {
    pub fn encode(index: u64, ty: FormulaType) -> Self {
        use FormulaType::{Binary, False, Not, True, Var};
        let tag = match ty {
            True => ENCODING_TRUE,
            False => ENCODING_FALSE,
            Var => ENCODING_VAR,
            Not => ENCODING_NOT,
            Binary(BinaryOp::And) => ENCODING_AND,
            Binary(BinaryOp::Or) => ENCODING_OR,
            Binary(BinaryOp::Impl) => ENCODING_IMPL,
            Binary(BinaryOp::Xor) => ENCODING_XOR,
            Binary(BinaryOp::Equiv) => ENCODING_EQUIV,
            Binary(BinaryOp::Nand) => ENCODING_NAND,
            Binary(BinaryOp::Nor) => ENCODING_NOR,
        };
        Self { encoding: u64::from(tag) | (index << INDEX_ENCODING_SHIFT) }
    }

    pub const fn encode_type(ty: FormulaType) -> Self {
        // only constants carry no index
        let tag = match ty {
            FormulaType::True => ENCODING_TRUE,
            FormulaType::False => ENCODING_FALSE,
            _ => panic!("Only constants can be encoded without an index"),
        };
        Self { encoding: tag as u64 }
    }

    pub const fn index(self) -> u64 {
        self.encoding >> INDEX_ENCODING_SHIFT
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn formula_type(self) -> FormulaType {
        use FormulaType::{Binary, False, Not, True, Var};
        match (self.encoding as u8) & TYPE_ENCODE_MASK {
            ENCODING_TRUE => True,
            ENCODING_FALSE => False,
            ENCODING_VAR => Var,
            ENCODING_NOT => Not,
            ENCODING_AND => Binary(BinaryOp::And),
            ENCODING_OR => Binary(BinaryOp::Or),
            ENCODING_IMPL => Binary(BinaryOp::Impl),
            ENCODING_XOR => Binary(BinaryOp::Xor),
            ENCODING_EQUIV => Binary(BinaryOp::Equiv),
            ENCODING_NAND => Binary(BinaryOp::Nand),
            ENCODING_NOR => Binary(BinaryOp::Nor),
            _ => panic!("Unexpected formula encoding"),
        }
    }
}
