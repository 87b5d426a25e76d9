// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Ecrire,
    Et,
    Finpour,
    Finproc,
    Finsi,
    Fintantque,
    Jusqua,
    Lire,
    Non,
    Ou,
    Pour,
    Principale,
    Procedure,
    Repeter,
    Si,
    Sinon,
    Sinonsi,
    Tantque,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }
}
