use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        BuilderFinalize, BuilderNew, BuilderSetBootstrap, BuilderSetParam, BuilderSetSeq, ContextGetBootstrap, ContextGetParam,
        ContextGetSeq,
    },
    error::Result,
    layouts::{Bootstrap, Builder, Context, Param, ParamSeq},
    oep::ContextBackend,
};

/// Plain description of a builder configuration.
///
/// Unset scalars are left to the native defaults. Empty sequences are not
/// forwarded. A description is turned into a context by replaying it
/// through the ordinary setters, so it is checked exactly like a chain of
/// setter calls would be.
///
/// The JSON form uses the field names below, with `bootstrap` one of
/// `"none"`, `"thin"` or `"thick"`:
/// `{"m":4096,"p":2,"r":1,"c":2,"bits":300,"bootstrap":"none"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gens: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ords: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mvec: Vec<i64>,
    pub bootstrap: Bootstrap,
}

impl Parameters {
    pub fn get(&self, param: Param) -> Option<u32> {
        match param {
            Param::M => self.m,
            Param::P => self.p,
            Param::R => self.r,
            Param::Bits => self.bits,
            Param::C => self.c,
        }
    }

    pub fn seq(&self, seq: ParamSeq) -> &[i64] {
        match seq {
            ParamSeq::Gens => &self.gens,
            ParamSeq::Ords => &self.ords,
            ParamSeq::Mvec => &self.mvec,
        }
    }

    /// Replays this description onto `builder`, scalars first, then
    /// sequences, then the bootstrap mode.
    pub fn apply<B: ContextBackend>(&self, builder: Builder<B>) -> Result<Builder<B>> {
        let mut builder: Builder<B> = builder;
        for param in Param::ALL {
            if let Some(value) = self.get(param) {
                builder = builder.param(param, value)?;
            }
        }
        for seq in ParamSeq::ALL {
            let values: &[i64] = self.seq(seq);
            if !values.is_empty() {
                builder = builder.seq(seq, values)?;
            }
        }
        match self.bootstrap {
            Bootstrap::None => Ok(builder),
            mode => builder.bootstrap(mode),
        }
    }

    /// Builds a context from a fresh builder.
    pub fn build<B: ContextBackend>(&self) -> Result<Context<B>> {
        self.apply(Builder::<B>::new())?.finalize()
    }

    /// Reads back the effective configuration of a finalized context.
    pub fn from_context<B: ContextBackend>(context: &Context<B>) -> Self {
        Self {
            m: context.m(),
            p: context.p(),
            r: context.r(),
            bits: context.bits(),
            c: context.c(),
            gens: context.gens(),
            ords: context.ords(),
            mvec: context.mvec(),
            bootstrap: context.bootstrap(),
        }
    }
}

impl FromStr for Parameters {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scalars = Param::ALL
            .iter()
            .filter_map(|&param| self.get(param).map(|value| format!("{param}={value}")));
        let seqs = ParamSeq::ALL
            .iter()
            .filter(|&&seq| !self.seq(seq).is_empty())
            .map(|&seq| format!("{seq}=[{}]", self.seq(seq).iter().join(", ")));
        let bootstrap = std::iter::once(format!("bootstrap={}", self.bootstrap));
        f.write_str(&scalars.chain(seqs).chain(bootstrap).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_json() {
        let params: Parameters = r#"{"m":4096,"p":2,"r":1,"c":2,"bits":300,"bootstrap":"none"}"#
            .parse()
            .unwrap();
        assert_eq!(params.m, Some(4096));
        assert_eq!(params.p, Some(2));
        assert_eq!(params.r, Some(1));
        assert_eq!(params.c, Some(2));
        assert_eq!(params.bits, Some(300));
        assert!(params.gens.is_empty());
        assert_eq!(params.bootstrap, Bootstrap::None);
    }

    #[test]
    fn missing_fields_default_to_unset() {
        let params: Parameters = r#"{"m":4095,"mvec":[7,5,9,13],"bootstrap":"thick"}"#.parse().unwrap();
        assert_eq!(params.p, None);
        assert_eq!(params.mvec, vec![7, 5, 9, 13]);
        assert_eq!(params.bootstrap, Bootstrap::Thick);
    }

    #[test]
    fn rejects_unknown_fields_and_negative_scalars() {
        assert!(r#"{"m":4096,"q":3}"#.parse::<Parameters>().is_err());
        assert!(r#"{"m":-1}"#.parse::<Parameters>().is_err());
        assert!(r#"{"bootstrap":"sometimes"}"#.parse::<Parameters>().is_err());
    }

    #[test]
    fn serializes_only_set_fields() {
        let params = Parameters {
            m: Some(4096),
            p: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"m":4096,"p":2,"bootstrap":"none"}"#
        );
    }

    #[test]
    fn display_lists_set_fields() {
        let params = Parameters {
            m: Some(4095),
            mvec: vec![7, 5, 9, 13],
            bootstrap: Bootstrap::Thin,
            ..Default::default()
        };
        assert_eq!(params.to_string(), "m=4095 mvec=[7, 5, 9, 13] bootstrap=thin");
    }
}
