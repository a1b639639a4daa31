use std::time::Duration;

/// Cuenta atrás programada sobre el tiempo de frame de egui (segundos, f64).
///
/// Igual que un `setTimeout` que se rearma: como mucho un tick por llamada y el
/// siguiente plazo se cuenta desde ese momento, sin recuperar segundos perdidos.
#[derive(Default, Debug, Clone)]
pub struct Ticker {
    deadline: Option<f64>,
}

impl Ticker {
    pub const PERIOD_SECS: f64 = 1.0;

    /// Devuelve true si vence un tick en `now`. Con `armed == false` se desprograma.
    pub fn poll(&mut self, now: f64, armed: bool) -> bool {
        if !armed {
            self.deadline = None;
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + Self::PERIOD_SECS);
                true
            }
            Some(_) => false,
            None => {
                self.deadline = Some(now + Self::PERIOD_SECS);
                false
            }
        }
    }

    /// Tiempo hasta el próximo tick, para pedir el repintado justo a tiempo.
    pub fn time_to_next(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|deadline| Duration::from_secs_f64((deadline - now).max(0.0)))
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }
}
