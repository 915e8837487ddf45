// src/noyau/scientifique.rs
//
// Fonctions scientifiques (trig / log / racines) avec mode d'angle.
//
// Contrats:
// - sin/cos/tan : l'argument est converti du mode courant vers les radians.
// - asin/acos : domaine [-1, 1], résultat reconverti vers le mode courant.
// - atan : pas de restriction, même reconversion.
// - log (base 10) et ln : argument > 0.
// - sqrt : argument >= 0.
// - abs / pow / exp : sans restriction.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAngle {
    Degre,
    Radian,
}

impl ModeAngle {
    /// Convertit une valeur du mode courant vers les radians.
    pub fn en_radians(self, valeur: f64) -> f64 {
        match self {
            ModeAngle::Degre => valeur * std::f64::consts::PI / 180.0,
            ModeAngle::Radian => valeur,
        }
    }

    /// Convertit des radians vers le mode courant.
    pub fn depuis_radians(self, valeur: f64) -> f64 {
        match self {
            ModeAngle::Degre => valeur * 180.0 / std::f64::consts::PI,
            ModeAngle::Radian => valeur,
        }
    }

    pub fn bascule(self) -> ModeAngle {
        match self {
            ModeAngle::Degre => ModeAngle::Radian,
            ModeAngle::Radian => ModeAngle::Degre,
        }
    }

    /// Étiquette courte pour l'UI.
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Degre => "DEG",
            ModeAngle::Radian => "RAD",
        }
    }
}

/// Composant scientifique : porte le mode d'angle courant (Degre par défaut).
#[derive(Clone, Debug)]
pub struct Scientifique {
    mode: ModeAngle,
}

impl Default for Scientifique {
    fn default() -> Self {
        Scientifique {
            mode: ModeAngle::Degre,
        }
    }
}

impl Scientifique {
    pub fn mode_angle(&self) -> ModeAngle {
        self.mode
    }

    /// Bascule DEG <-> RAD et retourne le nouveau mode.
    pub fn bascule_mode_angle(&mut self) -> ModeAngle {
        self.mode = self.mode.bascule();
        self.mode
    }

    pub fn sin(&self, valeur: f64) -> f64 {
        self.mode.en_radians(valeur).sin()
    }

    pub fn cos(&self, valeur: f64) -> f64 {
        self.mode.en_radians(valeur).cos()
    }

    pub fn tan(&self, valeur: f64) -> f64 {
        self.mode.en_radians(valeur).tan()
    }

    pub fn asin(&self, valeur: f64) -> Result<f64, String> {
        if !(-1.0..=1.0).contains(&valeur) {
            return Err("asin: argument hors de [-1, 1]".to_string());
        }
        Ok(self.mode.depuis_radians(valeur.asin()))
    }

    pub fn acos(&self, valeur: f64) -> Result<f64, String> {
        if !(-1.0..=1.0).contains(&valeur) {
            return Err("acos: argument hors de [-1, 1]".to_string());
        }
        Ok(self.mode.depuis_radians(valeur.acos()))
    }

    pub fn atan(&self, valeur: f64) -> f64 {
        self.mode.depuis_radians(valeur.atan())
    }

    /// Logarithme décimal (base 10).
    pub fn log(&self, valeur: f64) -> Result<f64, String> {
        if valeur <= 0.0 {
            return Err("log: argument non strictement positif".to_string());
        }
        Ok(valeur.log10())
    }

    /// Logarithme naturel (base e).
    pub fn ln(&self, valeur: f64) -> Result<f64, String> {
        if valeur <= 0.0 {
            return Err("ln: argument non strictement positif".to_string());
        }
        Ok(valeur.ln())
    }

    pub fn sqrt(&self, valeur: f64) -> Result<f64, String> {
        if valeur < 0.0 {
            return Err("sqrt: argument négatif".to_string());
        }
        Ok(valeur.sqrt())
    }

    pub fn abs(&self, valeur: f64) -> f64 {
        valeur.abs()
    }

    pub fn pow(&self, base: f64, exposant: f64) -> f64 {
        base.powf(exposant)
    }

    pub fn exp(&self, valeur: f64) -> f64 {
        valeur.exp()
    }

    /// Dispatch par nom (minuscules). Utilisé par l'évaluateur RPN.
    pub fn calculer_fonction(&self, nom: &str, valeur: f64) -> Result<f64, String> {
        match nom.to_lowercase().as_str() {
            "sin" => Ok(self.sin(valeur)),
            "cos" => Ok(self.cos(valeur)),
            "tan" => Ok(self.tan(valeur)),
            "asin" => self.asin(valeur),
            "acos" => self.acos(valeur),
            "atan" => Ok(self.atan(valeur)),
            "log" => self.log(valeur),
            "ln" => self.ln(valeur),
            "sqrt" => self.sqrt(valeur),
            "abs" => Ok(self.abs(valeur)),
            _ => Err(format!("fonction inconnue: '{nom}'")),
        }
    }
}
