use crate::commands::result::CommandResult;

/// ヘルプコマンドを実行
pub fn execute() -> CommandResult {
    CommandResult::Help
}
