use crate::domain::model::Notification;
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// 寫出所有通知檔。預設逐一寫入；實作可改為整批提交。
    fn write_all(&self, notifications: &[Notification]) -> Result<usize> {
        for note in notifications {
            self.write_file(&note.file_name, note.message.as_bytes())?;
        }
        Ok(notifications.len())
    }

    fn location(&self) -> &str;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &str;
    fn max_attempts(&self) -> usize;
    fn seed(&self) -> Option<u64>;
}
