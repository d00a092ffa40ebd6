use dialkit::ipc::Request;
use dialkit::settings::SettingsChange;
use dialkit::time::TimeSnapshot;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    Tick(TimeSnapshot),
    Change(SettingsChange),
    ConfigReload,
}

impl From<Request> for AppEvent {
    fn from(request: Request) -> Self {
        match request {
            Request::Show => AppEvent::Show,
            Request::Hide => AppEvent::Hide,
            Request::Reload => AppEvent::ConfigReload,
            Request::Change(change) => AppEvent::Change(change),
        }
    }
}
