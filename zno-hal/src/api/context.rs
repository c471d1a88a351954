use crate::layouts::{Bootstrap, Derived, NativeVersion, Param, ParamSeq};

/// Read back the scalar parameters of a context. `None` when the native
/// library reports the value as absent.
pub trait ContextGetParam {
    fn param(&self, param: Param) -> Option<u32>;

    fn m(&self) -> Option<u32> {
        self.param(Param::M)
    }

    fn p(&self) -> Option<u32> {
        self.param(Param::P)
    }

    fn r(&self) -> Option<u32> {
        self.param(Param::R)
    }

    fn bits(&self) -> Option<u32> {
        self.param(Param::Bits)
    }

    fn c(&self) -> Option<u32> {
        self.param(Param::C)
    }
}

/// Read back values computed during finalize.
pub trait ContextGetDerived {
    fn derived(&self, derived: Derived) -> Option<u64>;

    fn phi_m(&self) -> Option<u64> {
        self.derived(Derived::PhiM)
    }

    fn ord_p(&self) -> Option<u64> {
        self.derived(Derived::OrdP)
    }

    fn nslots(&self) -> Option<u64> {
        self.derived(Derived::NSlots)
    }
}

/// Read back owned copies of the integer sequences of a context.
pub trait ContextGetSeq {
    fn seq(&self, seq: ParamSeq) -> Vec<i64>;

    fn gens(&self) -> Vec<i64> {
        self.seq(ParamSeq::Gens)
    }

    fn ords(&self) -> Vec<i64> {
        self.seq(ParamSeq::Ords)
    }

    fn mvec(&self) -> Vec<i64> {
        self.seq(ParamSeq::Mvec)
    }
}

pub trait ContextGetBootstrap {
    fn bootstrap(&self) -> Bootstrap;

    fn is_bootstrappable(&self) -> bool {
        self.bootstrap().is_enabled()
    }
}

/// Version of the native library behind a backend.
pub trait LibraryVersion {
    fn version() -> NativeVersion;

    /// `"major.minor.patch"`.
    fn library_version() -> String {
        Self::version().to_string()
    }
}
