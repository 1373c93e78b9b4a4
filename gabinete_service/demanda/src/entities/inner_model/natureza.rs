use std::fmt;
use std::str::FromStr;

/// Category of a demanda, as offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Natureza {
    AtendimentoGeral,
    Educacao,
    EspacoPublico,
    Habitacao,
    Juridico,
    Legislativo,
    Regularizacao,
    RuasEBairros,
    Saude,
    Seguranca,
    ServicoSocial,
    FalarComDeputado,
}

impl Natureza {
    pub const ALL: [Natureza; 12] = [
        Natureza::AtendimentoGeral,
        Natureza::Educacao,
        Natureza::EspacoPublico,
        Natureza::Habitacao,
        Natureza::Juridico,
        Natureza::Legislativo,
        Natureza::Regularizacao,
        Natureza::RuasEBairros,
        Natureza::Saude,
        Natureza::Seguranca,
        Natureza::ServicoSocial,
        Natureza::FalarComDeputado,
    ];

    /// Label stored in the database and shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            Natureza::AtendimentoGeral => "Atendimento Geral",
            Natureza::Educacao => "Educação",
            Natureza::EspacoPublico => "Espaço Público",
            Natureza::Habitacao => "Habitação",
            Natureza::Juridico => "Jurídico",
            Natureza::Legislativo => "Legislativo",
            Natureza::Regularizacao => "Regularização",
            Natureza::RuasEBairros => "Ruas e Bairros",
            Natureza::Saude => "Saúde",
            Natureza::Seguranca => "Segurança",
            Natureza::ServicoSocial => "Serviço Social",
            Natureza::FalarComDeputado => "Falar com Deputado",
        }
    }
}

impl fmt::Display for Natureza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Natureza {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Natureza::ALL
            .iter()
            .copied()
            .find(|n| n.label() == label)
            .ok_or_else(|| format!("Unsupported natureza: `{}`", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for natureza in Natureza::ALL {
            assert_eq!(natureza.label().parse::<Natureza>().unwrap(), natureza);
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!("Saude".parse::<Natureza>().is_err());
        assert!("".parse::<Natureza>().is_err());
    }
}
